use crate::locale::Language;
use crate::questionnaire::OrientationType;
use serde::Serialize;

/// Overlay body shown for a type on the overview page.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TypeDetail {
    pub definition: &'static str,
    pub challenges: &'static [&'static str],
    pub misunderstandings: &'static [&'static str],
    pub recommendations: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct TypeProfile {
    pub key: OrientationType,
    pub label: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub short_desc: &'static str,
    pub detail: TypeDetail,
}

struct Visual {
    icon: &'static str,
    color: &'static str,
}

const fn visual(orientation: OrientationType) -> Visual {
    match orientation {
        OrientationType::Heterosexual => Visual { icon: "♂♀", color: "bg-blue-500" },
        OrientationType::Homosexual => Visual { icon: "♂♂/♀♀", color: "bg-red-500" },
        OrientationType::Bisexual => Visual { icon: "⚥", color: "bg-purple-500" },
        OrientationType::Pansexual => Visual { icon: "🌈", color: "bg-orange-400" },
        OrientationType::Graysexual => Visual { icon: "🌫️", color: "bg-gray-400" },
        OrientationType::Asexual => Visual { icon: "⚪", color: "bg-teal-500" },
        OrientationType::Skoliosexual => Visual { icon: "⚧", color: "bg-green-500" },
        OrientationType::Objectum => Visual { icon: "🏛️", color: "bg-yellow-800" },
        OrientationType::Sapiosexual => Visual { icon: "🧠", color: "bg-yellow-400" },
    }
}

pub fn type_profile(orientation: OrientationType, language: Language) -> TypeProfile {
    let Visual { icon, color } = visual(orientation);
    let (label, short_desc, detail) = match language {
        Language::Zh => zh(orientation),
        Language::En => en(orientation),
    };

    TypeProfile {
        key: orientation,
        label,
        icon,
        color,
        short_desc,
        detail,
    }
}

fn zh(orientation: OrientationType) -> (&'static str, &'static str, TypeDetail) {
    match orientation {
        OrientationType::Heterosexual => (
            "异性恋 Heterosexual",
            "对异性产生情感或性吸引，是最常见的性取向。",
            TypeDetail {
                definition: "对异性产生情感、浪漫及性吸引，占全球人口多数。",
                challenges: &["需注意避免对其他性取向群体的隐性歧视"],
                misunderstandings: &["异性恋是唯一\"正常\"的性取向"],
                recommendations: &[
                    "认知主流身份带来的社会特权，主动学习LGBTQ+知识以消除偏见。",
                    "避免使用\"正常/不正常\"等标签化语言，尊重他人自我认同。",
                    "在职场/社群中推动性别中立政策，营造包容环境。",
                ],
            },
        ),
        OrientationType::Homosexual => (
            "同性恋 Homosexual",
            "对同性产生情感或性吸引，包括男同和女同。",
            TypeDetail {
                definition: "对同性产生吸引，包括男同（Gay）和女同（Lesbian）。",
                challenges: &["面临家庭压力、职场歧视及法律权益缺失"],
                misunderstandings: &["同性恋是心理疾病或\"选择\"", "同性恋者不适合家庭生活"],
                recommendations: &[
                    "参与支持性社群，减少孤立感。",
                    "了解相关法律权益，保护自身隐私。",
                    "谨慎选择出柜时机，优先与信任的亲友沟通。",
                ],
            },
        ),
        OrientationType::Bisexual => (
            "双性恋 Bisexual",
            "对两性均可能产生吸引。",
            TypeDetail {
                definition: "对两性均可能产生吸引，但吸引程度可能偏向某一性别。",
                challenges: &["常遭遇\"双性恋不存在\"或\"滥交\"等刻板印象"],
                misunderstandings: &["双性恋者不忠诚"],
                recommendations: &[
                    "明确自身需求，避免因外界压力强迫自己\"选择一方\"。",
                    "参与双性恋专项支持小组，减少身份质疑。",
                ],
            },
        ),
        OrientationType::Pansexual => (
            "泛性恋 Pansexual",
            "吸引力不基于性别，涵盖多元群体。",
            TypeDetail {
                definition: "吸引力不基于性别，涵盖跨性别、非二元性别等群体。",
                challenges: &["泛性恋常被误解为\"双性恋\""],
                misunderstandings: &["泛性恋者没有界限"],
                recommendations: &[
                    "主动解释\"泛性恋\"与\"双性恋\"的区别，减少混淆。",
                    "参与性别多元活动，拓展支持网络。",
                ],
            },
        ),
        OrientationType::Graysexual => (
            "灰性恋 Graysexual",
            "性吸引力微弱或不稳定。",
            TypeDetail {
                definition: "性吸引力微弱或不稳定，介于有性恋与无性恋之间。",
                challenges: &["易被忽视，缺乏针对性支持资源"],
                misunderstandings: &["灰性恋者只是\"性冷淡\""],
                recommendations: &[
                    "通过日记追踪性吸引波动规律，增强自我认知。",
                    "在亲密关系中明确\"偶尔需要独处\"的需求。",
                ],
            },
        ),
        OrientationType::Asexual => (
            "无性恋 Asexual",
            "缺乏性欲望，但可能有浪漫情感需求。",
            TypeDetail {
                definition: "缺乏性欲望，但可能有浪漫情感需求。",
                challenges: &["常被误认为\"性冷淡\"或心理疾病"],
                misunderstandings: &["无性恋者不需要亲密关系"],
                recommendations: &[
                    "在亲密关系中明确表达无性倾向，避免伴侣误解。",
                    "通过艺术创作、学术研究等非性领域实现自我价值。",
                ],
            },
        ),
        OrientationType::Skoliosexual => (
            "跨性别恋 Skoliosexual",
            "对跨性别或非二元性别者产生吸引。",
            TypeDetail {
                definition: "对跨性别者、非二元性别者产生吸引。",
                challenges: &["可能被质疑\"物化跨性别群体\""],
                misunderstandings: &["跨性别恋者只是猎奇"],
                recommendations: &["避免使用\"跨性别者更有魅力\"等概括性语言，强调个体独特性。"],
            },
        ),
        OrientationType::Objectum => (
            "恋物性取向 Objectum Sexuality",
            "对无生命物体产生吸引。",
            TypeDetail {
                definition: "对无生命物体（如建筑、机器）产生情感或性吸引。",
                challenges: &["常被病理化，需区分\"非伤害性偏好\"与心理障碍"],
                misunderstandings: &["恋物性取向者无法与人建立关系"],
                recommendations: &["确保行为不侵犯他人财产权，避免公共场合过度亲密接触物体。"],
            },
        ),
        OrientationType::Sapiosexual => (
            "智性恋 Sapiosexual",
            "以智力为吸引核心。",
            TypeDetail {
                definition: "以智力为吸引核心，常见于高学历群体。",
                challenges: &["可能陷入\"智力优越感\"，忽视情感互动重要性"],
                misunderstandings: &["智性恋者只看重智商"],
                recommendations: &["在交流中平衡智力话题与情感表达，避免让对方感到被评判。"],
            },
        ),
    }
}

fn en(orientation: OrientationType) -> (&'static str, &'static str, TypeDetail) {
    match orientation {
        OrientationType::Heterosexual => (
            "Heterosexual",
            "Emotional or sexual attraction to the opposite sex; the most common orientation.",
            TypeDetail {
                definition: "Emotional, romantic and sexual attraction to the opposite sex, shared by most of the world's population.",
                challenges: &["Take care to avoid implicit discrimination against other orientations"],
                misunderstandings: &["Heterosexuality is the only \"normal\" orientation"],
                recommendations: &[
                    "Recognize the social privilege of a mainstream identity and learn about LGBTQ+ topics to unlearn bias.",
                    "Avoid labels such as \"normal/abnormal\" and respect how others identify.",
                    "Push for gender-neutral policies at work and in your community.",
                ],
            },
        ),
        OrientationType::Homosexual => (
            "Homosexual",
            "Emotional or sexual attraction to the same sex, including gay men and lesbians.",
            TypeDetail {
                definition: "Attraction to the same sex, including gay men and lesbians.",
                challenges: &["Family pressure, workplace discrimination and missing legal protections"],
                misunderstandings: &[
                    "Homosexuality is a mental illness or a \"choice\"",
                    "Homosexual people are not suited to family life",
                ],
                recommendations: &[
                    "Join supportive communities to reduce isolation.",
                    "Learn your legal rights and protect your privacy.",
                    "Choose when to come out carefully, starting with people you trust.",
                ],
            },
        ),
        OrientationType::Bisexual => (
            "Bisexual",
            "Attraction to both men and women.",
            TypeDetail {
                definition: "Possible attraction to both sexes, sometimes leaning toward one.",
                challenges: &["Stereotypes such as \"bisexuality doesn't exist\" or \"promiscuity\""],
                misunderstandings: &["Bisexual people are unfaithful"],
                recommendations: &[
                    "Be clear about your needs and don't let outside pressure force you to \"pick a side\".",
                    "Join bisexual support groups to counter identity doubts.",
                ],
            },
        ),
        OrientationType::Pansexual => (
            "Pansexual",
            "Attraction not based on gender, encompassing diverse groups.",
            TypeDetail {
                definition: "Attraction that does not depend on gender, including transgender and non-binary people.",
                challenges: &["Often mistaken for bisexuality"],
                misunderstandings: &["Pansexual people have no boundaries"],
                recommendations: &[
                    "Explain the difference between pansexual and bisexual to reduce confusion.",
                    "Take part in gender-diverse events to widen your support network.",
                ],
            },
        ),
        OrientationType::Graysexual => (
            "Graysexual",
            "Weak or unstable sexual attraction.",
            TypeDetail {
                definition: "Weak or unstable sexual attraction, between sexual and asexual.",
                challenges: &["Easily overlooked, with few dedicated support resources"],
                misunderstandings: &["Graysexual people are simply \"frigid\""],
                recommendations: &[
                    "Keep a journal of how attraction fluctuates to understand yourself better.",
                    "Say clearly in relationships when you occasionally need space.",
                ],
            },
        ),
        OrientationType::Asexual => (
            "Asexual",
            "Lack of sexual desire, but may have romantic needs.",
            TypeDetail {
                definition: "Lack of sexual desire, possibly with romantic needs.",
                challenges: &["Often mistaken for frigidity or a psychological disorder"],
                misunderstandings: &["Asexual people don't need intimate relationships"],
                recommendations: &[
                    "Communicate your asexuality clearly in relationships to avoid misunderstanding.",
                    "Find fulfilment in non-sexual pursuits such as art or research.",
                ],
            },
        ),
        OrientationType::Skoliosexual => (
            "Skoliosexual",
            "Attraction to transgender or non-binary individuals.",
            TypeDetail {
                definition: "Attraction to transgender and non-binary people.",
                challenges: &["May be accused of objectifying transgender people"],
                misunderstandings: &["Skoliosexuality is mere curiosity"],
                recommendations: &["Avoid generalizations like \"trans people are more attractive\" and value each person as an individual."],
            },
        ),
        OrientationType::Objectum => (
            "Objectum Sexuality",
            "Attraction to inanimate objects.",
            TypeDetail {
                definition: "Emotional or sexual attraction to inanimate objects such as buildings or machines.",
                challenges: &["Often pathologized; harmless preference must be distinguished from disorder"],
                misunderstandings: &["Objectum sexual people cannot form relationships with people"],
                recommendations: &["Respect other people's property and avoid excessive intimacy with objects in public."],
            },
        ),
        OrientationType::Sapiosexual => (
            "Sapiosexual",
            "Attraction primarily to intelligence.",
            TypeDetail {
                definition: "Attraction centred on intelligence, common among highly educated groups.",
                challenges: &["Risk of intellectual superiority that neglects emotional connection"],
                misunderstandings: &["Sapiosexual people only care about IQ"],
                recommendations: &["Balance intellectual topics with emotional expression so partners don't feel judged."],
            },
        ),
    }
}
