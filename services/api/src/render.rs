use sqs_quiz::content::{self, TypeGroup, TypeProfile};
use sqs_quiz::locale::Language;
use sqs_quiz::profile::ProfileEntryView;
use sqs_quiz::results::{RadarChartView, ResultsView};
use std::io::{self, Write};

const BAR_WIDTH: usize = 20;

pub(crate) fn render_results<W: Write>(out: &mut W, view: &ResultsView) -> io::Result<()> {
    let text = &content::ui_text(view.language).results;

    writeln!(out, "\n{}", text.title)?;
    writeln!(out, "{} {}", view.primary.icon, view.primary.label)?;
    writeln!(out, "{}", view.warning)?;

    writeln!(out, "\n{}", text.type_def)?;
    writeln!(out, "  {}", view.type_definition)?;
    for score in &view.dimension_scores {
        writeln!(out, "  - {}: {}{}", score.label, score.percent, text.score_unit)?;
    }

    if let Some(radar) = &view.radar {
        render_radar(out, radar)?;
    }

    writeln!(out, "\n{}", text.story)?;
    writeln!(out, "  {}", view.story_highlight)?;

    writeln!(out, "\n{}", text.features)?;
    for line in view.characteristics {
        writeln!(out, "  {line}")?;
    }
    writeln!(out, "\n{}", text.advice)?;
    for line in view.recommendations {
        writeln!(out, "  {line}")?;
    }

    writeln!(out, "\n{}", text.color_card)?;
    for card in &view.color_cards {
        let marker = if card.current { text.your_type } else { "" };
        writeln!(
            out,
            "  {:>3}-{:<3} {} {} {}",
            card.min, card.max, card.icon, card.label, marker
        )?;
    }

    writeln!(out, "\n{}", text.story_line)?;
    let labels = &text.storyline_labels;
    for line in &view.storylines {
        writeln!(out, "  [{}] {}", line.label, line.title)?;
        for sentence in line.story {
            writeln!(out, "    {sentence}")?;
        }
        writeln!(out, "    {}: {}", labels.risk, line.risk)?;
        writeln!(out, "    {}: {}", labels.opportunity, line.opportunity)?;
        writeln!(out, "    {}: {}", labels.suggestion, line.suggestion)?;
    }

    writeln!(out, "\n{}", text.resource)?;
    let resource_labels = &text.resource_labels;
    writeln!(out, "  {}: {}", resource_labels.concept, view.resources.concept)?;
    writeln!(out, "  {}: {}", resource_labels.paper, view.resources.paper)?;
    writeln!(out, "  {}: {}", resource_labels.org, view.resources.org)?;
    Ok(())
}

/// Draws the radar series as one horizontal bar per category.
pub(crate) fn render_radar<W: Write>(out: &mut W, chart: &RadarChartView) -> io::Result<()> {
    writeln!(out, "\n{}", chart.title)?;
    let width = chart
        .indicators
        .iter()
        .map(|indicator| indicator.name.chars().count())
        .max()
        .unwrap_or(0);

    for (indicator, value) in chart.indicators.iter().zip(&chart.values) {
        let filled = usize::from(*value) * BAR_WIDTH / usize::from(indicator.max.max(1));
        let padding = width.saturating_sub(indicator.name.chars().count());
        writeln!(
            out,
            "  {}{} {}{} {:>3}",
            indicator.name,
            " ".repeat(padding),
            "#".repeat(filled),
            ".".repeat(BAR_WIDTH.saturating_sub(filled)),
            value
        )?;
    }
    writeln!(out, "  {}", chart.note)
}

pub(crate) fn render_types_overview<W: Write>(
    out: &mut W,
    groups: &[TypeGroup],
    language: Language,
) -> io::Result<()> {
    let intro = content::ui_text(language).results.view_type_intro;
    for group in groups {
        writeln!(out, "{}", group.title)?;
        for profile in &group.types {
            writeln!(out, "  {} {}", profile.icon, profile.label)?;
            writeln!(out, "     {}", profile.short_desc)?;
            writeln!(
                out,
                "     {} -> types {}",
                intro.replace("{type}", profile.label),
                profile.key.key()
            )?;
        }
    }
    Ok(())
}

pub(crate) fn render_type_detail<W: Write>(
    out: &mut W,
    profile: &TypeProfile,
    language: Language,
) -> io::Result<()> {
    let labels = &content::ui_text(language).types;
    writeln!(out, "{} {}", profile.icon, profile.label)?;
    writeln!(out, "\n{}", labels.definition)?;
    writeln!(out, "  {}", profile.detail.definition)?;

    let sections = [
        (labels.challenges, profile.detail.challenges),
        (labels.misunderstandings, profile.detail.misunderstandings),
        (labels.recommendations, profile.detail.recommendations),
    ];
    for (title, lines) in sections {
        writeln!(out, "\n{title}")?;
        for line in lines {
            writeln!(out, "  - {line}")?;
        }
    }
    Ok(())
}

pub(crate) fn render_profile<W: Write>(
    out: &mut W,
    entries: &[ProfileEntryView],
    language: Language,
) -> io::Result<()> {
    let text = &content::ui_text(language).profile;
    writeln!(out, "\n{}", text.history)?;
    if entries.is_empty() {
        return writeln!(out, "  {}", text.empty);
    }
    for entry in entries {
        writeln!(out, "  #{} {} {}", entry.id, entry.date, entry.result)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqs_quiz::navigation::ResultsHandoff;
    use sqs_quiz::questionnaire::OrientationType;
    use sqs_quiz::scoring::{DimensionScores, RadarDatum};

    fn handoff() -> ResultsHandoff {
        let values = [50, 67, 50, 33, 75, 63, 50, 75, 17];
        ResultsHandoff {
            scores: DimensionScores {
                attraction: 1.0,
                relationship: 0.0,
                identity: 0.5,
            },
            answers: vec![2; 30],
            radar_data: OrientationType::ordered()
                .into_iter()
                .zip(values)
                .map(|(name, value)| RadarDatum { name, value })
                .collect(),
            primary_type: Some(OrientationType::Asexual),
        }
    }

    fn rendered(view: &ResultsView) -> String {
        let mut out = Vec::new();
        render_results(&mut out, view).expect("writes to memory");
        String::from_utf8(out).expect("utf-8 output")
    }

    #[test]
    fn results_mark_the_current_card_and_draw_bars() {
        let view = ResultsView::build(&handoff(), Language::En, None);
        let output = rendered(&view);

        assert!(output.contains("Your Test Result"));
        assert!(output.contains("Asexual ← Your Type"));
        assert!(output.contains("Attraction Spectrum: 100/100"));
        assert!(output.contains(&format!("{}{}  75", "#".repeat(15), ".".repeat(5))));
        assert!(output.contains("Respect diversity and keep exploring yourself."));
    }

    #[test]
    fn type_detail_lists_every_section() {
        let profile = content::type_profile(OrientationType::Bisexual, Language::Zh);
        let mut out = Vec::new();
        render_type_detail(&mut out, &profile, Language::Zh).expect("writes");
        let output = String::from_utf8(out).expect("utf-8");

        assert!(output.starts_with("⚥ 双性恋 Bisexual"));
        assert!(output.contains("常见误解\n  - 双性恋者不忠诚"));
    }

    #[test]
    fn empty_profile_prints_placeholder() {
        let mut out = Vec::new();
        render_profile(&mut out, &[], Language::En).expect("writes");
        let output = String::from_utf8(out).expect("utf-8");
        assert!(output.contains("No completed tests in this session yet."));
    }
}
