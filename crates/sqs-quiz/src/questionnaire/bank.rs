use super::domain::{Dimension, OrientationType, Question, QUESTION_COUNT, SECTION_SIZE};
use crate::locale::Language;

use OrientationType::*;

/// Orientation tag of each question, shared by every language.
const ORIENTATION_TABLE: [OrientationType; QUESTION_COUNT] = [
    Heterosexual,
    Homosexual,
    Pansexual,
    Skoliosexual,
    Asexual,
    Objectum,
    Skoliosexual,
    Graysexual,
    Graysexual,
    Bisexual,
    Skoliosexual,
    Skoliosexual,
    Sapiosexual,
    Pansexual,
    Graysexual,
    Pansexual,
    Pansexual,
    Bisexual,
    Heterosexual,
    Sapiosexual,
    Homosexual,
    Skoliosexual,
    Skoliosexual,
    Pansexual,
    Pansexual,
    Graysexual,
    Asexual,
    Homosexual,
    Objectum,
    Sapiosexual,
];

const ZH_STATEMENTS: [(&str, &str); QUESTION_COUNT] = [
    ("异性的香水气息会让我心跳漏拍", "映射金赛量表对异性吸引力的测量逻辑"),
    ("同性的笑容比异性更让我感到温暖", "参考性向度理论对同性吸引的界定"),
    ("专注整理书籍的陌生人，性别不影响我对TA心动", "呼应泛性恋的去性别化吸引特征"),
    ("听到中性嗓音读诗时会产生浪漫幻想", "结合跨性别声线吸引力研究"),
    ("从未对任何人产生过肢体亲密欲望", "对应无性恋的核心判定标准"),
    ("古旧书籍的磨砂触感比人体肌肤更让我着迷", "隐喻式表达恋物取向的心理机制"),
    ("看到跨性别者独特的穿搭风格会忍不住多看两眼", "测试对性别表达的开放态度"),
    ("深夜电台主持人性别模糊的声线常引发我的遐想", "映射非二元性别的声音吸引力"),
    ("对生理特征不符合传统分类的人产生过好奇或好感", "指向间性人群体接纳度评估"),
    ("特定性别的脆弱时刻（如强忍泪水）特别触动我", "涉及情感投射的性别偏好分析"),
    ("期待与跨性别伴侣在实验室研究分子料理", "映射跨性别亲密关系的场景化测试"),
    ("能接受伴侣的生理性别与心理认同不一致", "测试跨性别关系包容性"),
    ("智力对话带来的满足感远超肢体接触", "体现智性恋的核心特征"),
    ("更愿意在极光下交换手作戒指而非传统钻戒", "反映对制度性关系的态度"),
    ("排斥所有需要明确性别角色的亲密关系", "评估非二元性别关系倾向"),
    ("双人旅行时更在意目的地而非同伴性别", "测试泛性恋的情感优先特征"),
    ("期待收到性别未知者的手写情书", "映射去性别化的浪漫需求"),
    ("能理解开放式关系的存在合理性", "涉及多边恋伦理的认知测试"),
    ("与任何人约会都需要明确对方的性别定位", "反映性别确定性需求"),
    ("认为爱情的本质是灵魂共振而非生理匹配", "呼应酷儿理论的核心主张"),
    ("主动使用「他们」代词称呼非二元性别者", "测试语言包容性实践"),
    ("认为性别重置手术是自我认同的重要途径", "评估跨性别医疗认知"),
    ("穿着中性服装时会产生强烈性别愉悦感", "引用跨性别euphoria概念"),
    ("期待未来社会取消所有性别分类标识", "测试性别解构的前沿态度"),
    ("认为「爱情应超越生理性别」是基本人权", "衡量社会平等价值观"),
    ("曾因性取向问题产生长期自我怀疑", "映射性少数群体认知困境"),
    ("认为无性恋是心理疾病的说法不可接受", "反对性取向病理化观点"),
    ("愿意参与彩虹主题公益活动", "测试社群归属感"),
    ("认为性取向会随时间推移自然流动变化", "呼应金赛流动性取向理论"),
    ("期待建立更精细的性取向分类体系", "指向学术研究前沿期待"),
];

const EN_STATEMENTS: [(&str, &str); QUESTION_COUNT] = [
    (
        "The scent of the opposite sex (hair, body, hormones) makes my heart race",
        "Maps to Kinsey scale measurement of heterosexual attraction",
    ),
    (
        "Same-sex smiles make me feel more comfortable and warm than opposite-sex ones",
        "References sexual orientation theory for same-sex attraction",
    ),
    (
        "I feel attracted to strangers focused on tasks, regardless of gender, even wanting to photograph them",
        "Reflects pansexual gender-neutral attraction",
    ),
    (
        "Neutral voices reading poetry stir my emotions and romantic fantasies more than \"magnetic male voices\" or \"mature female voices\"",
        "Incorporates transgender voice attraction research",
    ),
    (
        "I have never fantasized about physical intimacy with anyone, regardless of gender",
        "Corresponds to core asexual criteria",
    ),
    (
        "The matte texture of old books fascinates me more than human skin contact",
        "Metaphorical expression of objectum sexuality",
    ),
    (
        "I can't help but notice transgender people's unique fashion styles (male-to-female, female-to-male cosplayers)",
        "Tests openness to gender expression",
    ),
    (
        "Gender-ambiguous late-night radio host voices often trigger my fantasies",
        "Maps to non-binary voice attraction",
    ),
    (
        "I have felt curiosity or attraction to people whose physical characteristics don't fit traditional categories, like long-haired beautiful men or short-haired cool women",
        "Points to intersex acceptance assessment",
    ),
    (
        "Vulnerable moments of a specific gender (like holding back tears) particularly move me",
        "Involves gender preference analysis in emotional projection",
    ),
    (
        "I look forward to cooking with a transgender partner in the kitchen or dancing under dim candlelight",
        "Maps to transgender intimate relationship scenarios",
    ),
    (
        "I can accept partners whose biological sex differs from their gender identity, like gentle men or strong women",
        "Tests transgender relationship inclusivity",
    ),
    (
        "Intellectually logical conversations bring more satisfaction than physical contact",
        "Embodies core sapiosexual characteristics",
    ),
    (
        "I prefer exchanging DIY rings under the aurora borealis over traditional diamond rings",
        "Reflects attitude toward institutional relationships",
    ),
    (
        "I reject all intimate relationships requiring \"clear gender roles\"",
        "Evaluates non-binary relationship tendencies",
    ),
    (
        "When traveling as a couple, I care more about the destination than my companion's gender",
        "Tests pansexual emotional priority",
    ),
    (
        "I look forward to receiving handwritten love letters from unknown genders, focusing more on content than gender",
        "Maps to gender-neutral romantic needs",
    ),
    (
        "I can understand open relationships, such as dating my partner's partner",
        "Involves polyamory ethics cognition",
    ),
    (
        "I need to know the gender of anyone I date in advance",
        "Reflects gender certainty needs",
    ),
    (
        "I believe the essence of love is soul compatibility rather than physical matching",
        "Echoes core queer theory propositions",
    ),
    (
        "I actively use \"they\" pronouns for non-traditional heterosexuals",
        "Tests language inclusivity practice",
    ),
    (
        "I respect others using gender reassignment surgery to achieve self-identity",
        "Assesses transgender medical cognition",
    ),
    (
        "Wearing gender-neutral clothing brings strong gender euphoria, with a sense of novelty and excitement",
        "References transgender euphoria concept",
    ),
    (
        "I look forward to a future society without gender classification labels",
        "Tests gender deconstruction attitudes",
    ),
    (
        "I believe \"love should transcend biological gender\"",
        "Measures social equality values",
    ),
    (
        "I have experienced long-term self-doubt due to sexual orientation issues",
        "Maps to sexual minority cognitive dilemmas",
    ),
    (
        "I cannot accept the notion that asexuality is a psychological disorder",
        "Opposes sexual orientation pathologization",
    ),
    (
        "I am willing to participate in rainbow-themed public welfare activities",
        "Tests community belonging",
    ),
    (
        "I believe sexual orientation can change over time, potentially being \"bent\" one day",
        "Echoes Kinsey's fluid sexual orientation theory",
    ),
    (
        "I look forward to establishing a more refined sexual orientation classification system, beyond just homosexual, heterosexual, and bisexual",
        "Points to academic research frontiers",
    ),
];

/// The localized question set for one language.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    language: Language,
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn for_language(language: Language) -> Self {
        let statements = match language {
            Language::Zh => &ZH_STATEMENTS,
            Language::En => &EN_STATEMENTS,
        };

        let questions = statements
            .iter()
            .zip(ORIENTATION_TABLE)
            .enumerate()
            .map(|(index, (&(text, note), orientation))| Question {
                id: index as u8 + 1,
                dimension: Dimension::ordered()[index / SECTION_SIZE],
                orientation,
                text,
                note,
            })
            .collect();

        Self {
            language,
            questions,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn section(&self, dimension: Dimension) -> &[Question] {
        &self.questions[dimension.range()]
    }

    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn every_language_shares_the_orientation_table() {
        let zh = QuestionBank::for_language(Language::Zh);
        let en = QuestionBank::for_language(Language::En);

        assert_eq!(zh.questions().len(), QUESTION_COUNT);
        for (left, right) in zh.questions().iter().zip(en.questions()) {
            assert_eq!(left.id, right.id);
            assert_eq!(left.orientation, right.orientation);
            assert_eq!(left.dimension, right.dimension);
            assert_ne!(left.text, right.text);
        }
    }

    #[test]
    fn every_orientation_is_backed_by_questions() {
        let bank = QuestionBank::for_language(Language::En);
        let mut counts: HashMap<OrientationType, usize> = HashMap::new();
        for question in bank.questions() {
            *counts.entry(question.orientation).or_default() += 1;
        }

        for orientation in OrientationType::ordered() {
            assert!(counts.get(&orientation).copied().unwrap_or(0) >= 1);
        }
        assert_eq!(counts[&OrientationType::Pansexual], 6);
        assert_eq!(counts[&OrientationType::Heterosexual], 2);
    }

    #[test]
    fn sections_hold_ten_questions_each() {
        let bank = QuestionBank::for_language(Language::Zh);
        let identity = bank.section(Dimension::Identity);
        assert_eq!(identity.len(), SECTION_SIZE);
        assert_eq!(identity[0].id, 21);
        assert!(identity
            .iter()
            .all(|question| question.dimension == Dimension::Identity));
    }
}
