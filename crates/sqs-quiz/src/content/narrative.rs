use crate::locale::Language;
use crate::questionnaire::OrientationType;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StorylineKind {
    Suppressed,
    ComingOut,
    Fluidity,
}

impl StorylineKind {
    pub const fn ordered() -> [Self; 3] {
        [Self::Suppressed, Self::ComingOut, Self::Fluidity]
    }
}

/// One "parallel world" path for a type.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Storyline {
    pub story: &'static [&'static str],
    pub risk: &'static str,
    pub opportunity: &'static str,
    pub suggestion: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ResourceTriple {
    pub concept: &'static str,
    pub paper: &'static str,
    pub org: &'static str,
}

pub(super) fn characteristics(
    orientation: OrientationType,
    language: Language,
) -> Option<&'static [&'static str]> {
    match (orientation, language) {
        (OrientationType::Heterosexual, Language::En) => Some(&[
            "1. Traditional Gender Role Identity: Heterosexual individuals typically identify with traditional gender role divisions and tend to follow mainstream gender norms in intimate relationships.",
            "2. High Social Acceptance: As the mainstream orientation, heterosexual individuals enjoy higher acceptance and inclusion in society, facing less discrimination related to sexual orientation.",
            "3. Relatively Less Family Pressure: Heterosexual individuals face relatively less social and family pressure in terms of family formation and childbearing.",
            "4. Emotional Expression: Heterosexual individuals' emotional expression often aligns with mainstream social expectations, making it easier to receive social support in intimate relationships.",
            "5. Self-Identity Process: The sexual orientation identification process for heterosexual individuals is usually more natural, with less identity-related distress.",
            "6. Social Resource Access: Heterosexual individuals face fewer restrictions in accessing social resources and employment opportunities due to their orientation.",
            "7. Mental Health Status: Due to less pressure related to sexual orientation, heterosexual individuals generally have better mental health.",
            "8. Intimate Relationship Patterns: Heterosexual individuals' relationship patterns often align with mainstream social expectations, making it easier to gain family and social recognition.",
            "9. Social Support Network: Heterosexual individuals find it easier to establish social support networks that align with mainstream expectations.",
            "10. Life Planning: In terms of career development and family planning, heterosexual individuals' choices often align with mainstream social expectations.",
        ]),
        (OrientationType::Homosexual, Language::En) => Some(&[
            "1. Authentic Self-Identity: Homosexual individuals often need to go through a process of awakening and acceptance of self-identity during their growth.",
            "2. Subtle and Profound Emotional Expression: Due to social environment influences, homosexual individuals often express emotions more carefully and subtly.",
            "3. Social Adaptation and Stress Resistance: Facing external prejudice and discrimination, homosexual individuals typically develop strong social adaptation and stress resistance abilities.",
            "4. Multicultural Inclusivity: In the process of self-identity, homosexual individuals often encounter diverse gender and sexual orientation concepts.",
            "5. Creativity and Self-Expression: Many homosexual individuals show high creativity in art, literature, and design fields.",
            "6. Community Belonging and Mutual Support: In seeking self-identity, homosexual individuals often actively join LGBTQ+ communities.",
            "7. Sensitivity to Social Justice: Having experienced injustice, homosexual individuals are usually more concerned about social equity and human rights issues.",
            "8. Loyalty and Stability in Relationships: Research shows that many homosexual partners show high loyalty and stability after establishing relationships.",
            "9. Self-Growth and Reflection: In the process of exploring self-identity, homosexual individuals experience significant self-reflection and growth.",
            "10. Lifestyle Diversity: Homosexual individuals show high diversity in lifestyle, interests, and social circles.",
        ]),
        (OrientationType::Heterosexual, Language::Zh) => Some(&[
            "1. 传统性别角色认同：通常认同传统的性别角色分工，在亲密关系中倾向遵循主流性别规范。",
            "2. 社会接纳度高：作为主流取向，享有更高的社会接纳度，较少遭遇与性取向相关的歧视。",
            "3. 家庭压力相对较小：在组建家庭与生育方面面临的社会和家庭压力相对较小。",
            "4. 情感表达：情感表达方式通常符合社会主流期待，更容易在亲密关系中获得社会支持。",
            "5. 自我认同过程：性取向认同过程通常较为自然，较少经历身份困扰。",
            "6. 社会资源获取：在获取社会资源与就业机会时较少因性取向受限。",
            "7. 心理健康状况：由于性取向相关压力较小，整体心理健康状况较好。",
            "8. 亲密关系模式：关系模式多符合社会主流期待，更容易获得家庭与社会认可。",
            "9. 社会支持网络：更容易建立符合主流期待的社会支持网络。",
            "10. 人生规划：在职业发展与家庭规划上的选择往往与社会主流期待一致。",
        ]),
        (OrientationType::Homosexual, Language::Zh) => Some(&[
            "1. 真实的自我认同：成长过程中往往需要经历自我身份的觉醒与接纳。",
            "2. 细腻而深沉的情感表达：受社会环境影响，情感表达通常更加谨慎和含蓄。",
            "3. 社会适应与抗压能力：面对外界偏见与歧视，通常发展出较强的社会适应与抗压能力。",
            "4. 多元文化包容性：在自我认同过程中常接触多元的性别与性取向观念。",
            "5. 创造力与自我表达：许多人在艺术、文学、设计等领域展现出很高的创造力。",
            "6. 社群归属与互助：在寻求自我认同时常积极加入LGBTQ+社群。",
            "7. 对社会公正的敏感：经历过不公，通常更关注社会公平与人权议题。",
            "8. 关系中的忠诚与稳定：研究显示许多同性伴侣在建立关系后表现出很高的忠诚度与稳定性。",
            "9. 自我成长与反思：在探索自我认同的过程中经历显著的自我反思与成长。",
            "10. 生活方式多元：在生活方式、兴趣爱好与社交圈层上表现出高度多样性。",
        ]),
        _ => None,
    }
}

pub(super) fn recommendations(
    orientation: OrientationType,
    language: Language,
) -> Option<&'static [&'static str]> {
    match (orientation, language) {
        (OrientationType::Heterosexual, Language::En) => Some(&[
            "1. Maintain an Open Mind: While being the mainstream orientation, maintain inclusiveness and understanding of diverse orientations.",
            "2. Engage in Multicultural Activities: Actively learn about and understand different orientation groups' cultures and needs.",
            "3. Support Equal Rights: Actively participate in and support LGBTQ+ equal rights movements.",
            "4. Develop Empathy: Try to understand the challenges and pressures faced by different orientation groups.",
            "5. Educate the Next Generation: Help the next generation establish correct understanding of diverse orientations.",
            "6. Focus on Mental Health: Maintain good mental health and seek professional help when needed.",
            "7. Build Support Network: Establish support networks with like-minded friends.",
            "8. Continuous Learning: Stay updated with the latest research and developments in sexual orientation.",
            "9. Participate in Public Welfare: Help those in need through public welfare activities.",
            "10. Maintain Self-Growth: Keep learning and improving, maintaining an open and inclusive mindset.",
        ]),
        (OrientationType::Homosexual, Language::En) => Some(&[
            "1. Accept Yourself, Acknowledge Inner Needs: Learn to accept your true self regardless of external evaluation.",
            "2. Find Support System: Actively connect with like-minded friends and join LGBTQ+ communities or support organizations.",
            "3. Focus on Mental Health: Seek professional psychological counseling if experiencing long-term anxiety, depression, or loneliness.",
            "4. Learn Self-Protection: Be cautious about expressing your orientation in unsafe environments.",
            "5. Improve Communication Skills: Honest communication is key to maintaining relationships.",
            "6. Participate in Public Welfare: Help others and enhance self-worth through LGBTQ+ projects and volunteer work.",
            "7. Continuous Learning: Stay updated with the latest research and social dynamics in gender and orientation.",
            "8. Plan for the Future: Make rational choices in career and family planning based on your situation.",
            "9. Develop Hobbies: Rich hobbies help relieve stress and enhance life happiness.",
            "10. Focus on Legal Rights: Understand local and international LGBTQ+ laws and policies, actively protect your rights.",
        ]),
        (OrientationType::Heterosexual, Language::Zh) => Some(&[
            "1. 保持开放心态：作为主流取向，也要保持对多元取向的包容与理解。",
            "2. 参与多元文化活动：主动了解不同取向群体的文化与需求。",
            "3. 支持平权：积极参与并支持LGBTQ+平权运动。",
            "4. 培养同理心：尝试理解不同取向群体所面临的挑战与压力。",
            "5. 教育下一代：帮助下一代建立对多元取向的正确认知。",
            "6. 关注心理健康：保持良好的心理状态，必要时寻求专业帮助。",
            "7. 建立支持网络：与志同道合的朋友建立支持网络。",
            "8. 持续学习：关注性取向领域的最新研究与进展。",
            "9. 参与公益：通过公益活动帮助有需要的人。",
            "10. 保持自我成长：不断学习进步，保持开放包容的心态。",
        ]),
        (OrientationType::Homosexual, Language::Zh) => Some(&[
            "1. 接纳自己，正视内心需求：无论外界如何评价，学会接纳真实的自己。",
            "2. 寻找支持系统：主动结识志同道合的朋友，加入LGBTQ+社群或支持组织。",
            "3. 关注心理健康：如长期焦虑、抑郁或孤独，请寻求专业心理咨询。",
            "4. 学会自我保护：在不安全的环境中谨慎表达自己的取向。",
            "5. 提升沟通能力：坦诚沟通是维系关系的关键。",
            "6. 参与公益：通过LGBTQ+项目与志愿服务帮助他人、提升自我价值。",
            "7. 持续学习：关注性别与取向领域的最新研究与社会动态。",
            "8. 规划未来：结合自身情况，在职业与家庭规划上做出理性选择。",
            "9. 培养爱好：丰富的爱好有助于缓解压力、提升生活幸福感。",
            "10. 关注法律权益：了解本地及国际LGBTQ+相关法律政策，积极维护自身权益。",
        ]),
        _ => None,
    }
}

pub(super) fn story_highlight(orientation: OrientationType, language: Language) -> &'static str {
    match (orientation, language) {
        (OrientationType::Heterosexual, Language::En) => "[True Story] Your heterosexual friends may also be struggling with self-identity and social expectations. Everyone's growth deserves understanding.",
        (OrientationType::Homosexual, Language::En) => "[The Story of Alan Turing] Alan Turing, a British mathematician and computer science pioneer, was persecuted for his homosexuality and died young. His story inspires countless LGBTQ+ people to pursue their true selves.",
        (OrientationType::Bisexual, Language::En) => "[The Story of Freddie Mercury] Queen's lead singer Freddie Mercury openly identified as bisexual and broke boundaries with his music.",
        (OrientationType::Pansexual, Language::En) => "[The Story of Miley Cyrus] American pop star Miley Cyrus publicly identifies as pansexual and advocates for LGBTQ+ inclusion and equality.",
        (OrientationType::Asexual, Language::En) => "[The Story of David Jay] David Jay, founder of AVEN, promotes asexual visibility and social understanding.",
        (OrientationType::Graysexual, Language::En) => "[Graysexual Voices] 'I don't always feel attraction, but when I meet someone special, it's precious.' — Shared by a Chinese graysexual community member.",
        (OrientationType::Skoliosexual, Language::En) => "[The Story of Laverne Cox] American transgender actress Laverne Cox speaks out for the trans community and promotes social inclusion.",
        (OrientationType::Objectum, Language::En) => "[The Story of Erika Eiffel] Erika Eiffel is known for 'marrying' the Eiffel Tower and calls for understanding of objectum sexuality.",
        (OrientationType::Sapiosexual, Language::En) => "[Sapiosexual Voices] 'I'm attracted to sparks of thought, and conversations with interesting souls make me happy.' — Shared by the sapiosexual community on Zhihu.",
        (OrientationType::Heterosexual, Language::Zh) => "【真实故事】你身边的异性恋朋友，也可能正在自我认同与社会期待之间挣扎。每个人的成长都值得被理解。",
        (OrientationType::Homosexual, Language::Zh) => "【艾伦·图灵的故事】英国数学家、计算机科学先驱艾伦·图灵因同性恋身份遭受迫害，英年早逝。他的故事激励着无数LGBTQ+人士追寻真实的自我。",
        (OrientationType::Bisexual, Language::Zh) => "【弗雷迪·摩克瑞的故事】皇后乐队主唱弗雷迪·摩克瑞公开认同双性恋身份，用音乐打破边界。",
        (OrientationType::Pansexual, Language::Zh) => "【麦莉·赛勒斯的故事】美国流行歌手麦莉·赛勒斯公开认同泛性恋，倡导LGBTQ+包容与平等。",
        (OrientationType::Asexual, Language::Zh) => "【大卫·杰伊的故事】AVEN创始人大卫·杰伊致力于提升无性恋群体的可见度与社会理解。",
        (OrientationType::Graysexual, Language::Zh) => "【灰性恋之声】“我并不总会感到吸引，但遇到特别的人时，那份心动弥足珍贵。”——来自一位灰性恋社群成员的分享。",
        (OrientationType::Skoliosexual, Language::Zh) => "【拉文·考克斯的故事】美国跨性别演员拉文·考克斯为跨性别群体发声，推动社会包容。",
        (OrientationType::Objectum, Language::Zh) => "【艾丽卡·埃菲尔的故事】艾丽卡·埃菲尔因与埃菲尔铁塔“结婚”而闻名，呼吁社会理解恋物性取向。",
        (OrientationType::Sapiosexual, Language::Zh) => "【智性恋之声】“我被思想的火花吸引，和有趣的灵魂对话让我快乐。”——来自知乎智性恋社群的分享。",
    }
}

pub(super) fn storyline(
    kind: StorylineKind,
    orientation: OrientationType,
    language: Language,
) -> Option<Storyline> {
    let line = match (kind, orientation, language) {
        (StorylineKind::Suppressed, OrientationType::Heterosexual, Language::En) => Storyline {
            story: &[
                "You choose to conform to the mainstream, hiding part of your true self.",
                "You may gain superficial stability, but there is always an unfulfilled longing inside.",
                "You constantly weigh self-identity and social expectations.",
            ],
            risk: "Long-term suppression can affect happiness and mental health.",
            opportunity: "You will better understand others' struggles and develop empathy.",
            suggestion: "Talk to trusted friends and gradually explore ways to express yourself.",
        },
        (StorylineKind::Suppressed, OrientationType::Homosexual, Language::En) => Storyline {
            story: &[
                "You choose to hide your true self and try to fit into mainstream society. You may marry the opposite sex and play traditional roles, but there is always an unfillable void inside.",
                "In intimate relationships, you often feel lonely and disconnected, unable to build true emotional bonds.",
                "You may question your self-worth late at night, even falling into depression or anxiety.",
            ],
            risk: "Long-term suppression may lead to mental health issues and even affect physical health.",
            opportunity: "You develop strong self-protection and empathy, becoming more sensitive to others' difficulties.",
            suggestion: "Seek LGBTQ+-friendly counseling and gradually explore safe ways to express your identity.",
        },
        (StorylineKind::ComingOut, OrientationType::Heterosexual, Language::En) => Storyline {
            story: &[
                "You choose to express your true self at the right time.",
                "You will experience some social pressure but also gain understanding and support.",
                "You gradually build confidence and a sense of belonging.",
            ],
            risk: "You may face misunderstanding and short-term pressure.",
            opportunity: "You can build more authentic relationships and grow personally.",
            suggestion: "Take it step by step and share with people you trust.",
        },
        (StorylineKind::ComingOut, OrientationType::Homosexual, Language::En) => Storyline {
            story: &[
                "You decide to come out to family and friends, possibly facing misunderstanding or rejection at first.",
                "At work and in public, you must weigh the risks of coming out.",
                "Over time, you may meet more like-minded friends and gain community support.",
            ],
            risk: "You may face family tension, workplace discrimination, and other real pressures.",
            opportunity: "You have the chance to build authentic relationships and gain the freedom of self-acceptance.",
            suggestion: "Assess your environment, choose a safe time to come out, and seek help from LGBTQ+ organizations.",
        },
        (StorylineKind::Fluidity, OrientationType::Heterosexual, Language::En) => Storyline {
            story: &[
                "You experience the diversity and fluidity of sexual orientation and gradually understand yourself.",
                "You discover more possibilities and make friends from different backgrounds.",
                "You learn to appreciate every unique emotional experience.",
            ],
            risk: "Fluidity may bring temporary confusion and unease.",
            opportunity: "You gain richer life experiences and personal growth.",
            suggestion: "Stay open-minded and be brave in exploring and expressing yourself.",
        },
        (StorylineKind::Fluidity, OrientationType::Homosexual, Language::En) => Storyline {
            story: &[
                "You find that your emotional and sexual attraction changes subtly over time and in different environments.",
                "You may develop feelings for people of different genders and gradually understand the fluidity of orientation.",
                "You learn to accept yourself and no longer limit your identity with labels.",
            ],
            risk: "Periods of identity fluidity may bring self-doubt and external questioning.",
            opportunity: "You experience richer relationships and personal growth.",
            suggestion: "Record your changes, stay open-minded, and be brave in exploring.",
        },
        (StorylineKind::Suppressed, OrientationType::Heterosexual, Language::Zh) => Storyline {
            story: &[
                "你选择顺从主流，隐藏了部分真实的自己。",
                "你或许获得了表面的安稳，但内心总有一份未被满足的渴望。",
                "你不断在自我认同与社会期待之间权衡。",
            ],
            risk: "长期压抑可能影响幸福感与心理健康。",
            opportunity: "你会更理解他人的挣扎，培养出同理心。",
            suggestion: "与信任的朋友交流，逐步探索表达自我的方式。",
        },
        (StorylineKind::Suppressed, OrientationType::Homosexual, Language::Zh) => Storyline {
            story: &[
                "你选择隐藏真实的自我，努力融入主流社会。你也许会与异性结婚、扮演传统角色，但内心始终有一块无法填补的空缺。",
                "在亲密关系中，你常感到孤独与疏离，难以建立真正的情感连接。",
                "你可能在深夜怀疑自我价值，甚至陷入抑郁或焦虑。",
            ],
            risk: "长期压抑可能导致心理健康问题，甚至影响身体健康。",
            opportunity: "你发展出很强的自我保护能力与同理心，对他人的困境更加敏感。",
            suggestion: "寻求LGBTQ+友好的心理咨询，逐步探索安全表达身份的方式。",
        },
        (StorylineKind::ComingOut, OrientationType::Heterosexual, Language::Zh) => Storyline {
            story: &[
                "你选择在合适的时机表达真实的自己。",
                "你会经历一些社会压力，但也会收获理解与支持。",
                "你逐渐建立起自信与归属感。",
            ],
            risk: "你可能面临误解与短期压力。",
            opportunity: "你能建立更真实的关系，实现个人成长。",
            suggestion: "循序渐进，先与信任的人分享。",
        },
        (StorylineKind::ComingOut, OrientationType::Homosexual, Language::Zh) => Storyline {
            story: &[
                "你决定向家人和朋友出柜，起初可能面临误解甚至拒绝。",
                "在职场与公共场合，你需要权衡出柜的风险。",
                "随着时间推移，你可能结识更多志同道合的朋友，获得社群支持。",
            ],
            risk: "你可能面临家庭矛盾、职场歧视等现实压力。",
            opportunity: "你有机会建立真实的关系，获得自我接纳的自由。",
            suggestion: "评估所处环境，选择安全的时机出柜，并向LGBTQ+组织寻求帮助。",
        },
        (StorylineKind::Fluidity, OrientationType::Heterosexual, Language::Zh) => Storyline {
            story: &[
                "你体验到性取向的多元与流动，逐渐认识自己。",
                "你发现更多可能，结识来自不同背景的朋友。",
                "你学会欣赏每一段独特的情感体验。",
            ],
            risk: "流动性可能带来暂时的困惑与不安。",
            opportunity: "你获得更丰富的人生经历与个人成长。",
            suggestion: "保持开放心态，勇敢探索与表达自我。",
        },
        (StorylineKind::Fluidity, OrientationType::Homosexual, Language::Zh) => Storyline {
            story: &[
                "你发现自己的情感与性吸引会随着时间和环境发生微妙变化。",
                "你可能对不同性别的人产生感情，逐渐理解取向的流动性。",
                "你学会接纳自己，不再用标签限制身份。",
            ],
            risk: "身份流动期可能带来自我怀疑与外界质疑。",
            opportunity: "你体验到更丰富的关系与个人成长。",
            suggestion: "记录自己的变化，保持开放，勇于探索。",
        },
        _ => return None,
    };
    Some(line)
}

pub(super) fn resources(orientation: OrientationType, language: Language) -> ResourceTriple {
    let (concept, paper, org) = match (orientation, language) {
        (OrientationType::Heterosexual, Language::En) => ("Heteronormativity Theory", "Heteronormativity and Social Structure", "Chinese Psychological Society Gender Psychology Committee"),
        (OrientationType::Homosexual, Language::En) => ("Minority Stress Model", "Mental Health and Social Support of Homosexuals", "Tongzhi Public Welfare"),
        (OrientationType::Bisexual, Language::En) => ("Monique Wittig Theory", "Bisexual Mental Health White Paper", "Beijing LGBT Center"),
        (OrientationType::Pansexual, Language::En) => ("Gender Fluidity Theory", "Gender Diversity and Social Inclusion", "Rainbow Home"),
        (OrientationType::Graysexual, Language::En) => ("Attraction Spectrum", "Psychological Study of Graysexual Groups", "Asexuality China"),
        (OrientationType::Asexual, Language::En) => ("Sexual Orientation Diversity Theory", "Asexual Mental Health Guide", "Asexuality China"),
        (OrientationType::Skoliosexual, Language::En) => ("Queer Gender Theory", "Transgender Psychology and Social Support", "Trans Home"),
        (OrientationType::Objectum, Language::En) => ("Objectum Psychology", "Psychological Mechanisms of Objectum Sexuality", "Chinese Psychological Society Gender Psychology Committee"),
        (OrientationType::Sapiosexual, Language::En) => ("Intellectual Attraction Theory", "Sapiosexuality and Intimate Relationships", "Rainbow Home"),
        (OrientationType::Heterosexual, Language::Zh) => ("异性恋正统主义理论", "《异性恋正统与社会结构》", "中国心理学会性别心理专委会"),
        (OrientationType::Homosexual, Language::Zh) => ("少数群体压力模型", "《同性恋者心理健康与社会支持》", "同志公益"),
        (OrientationType::Bisexual, Language::Zh) => ("莫尼克·威蒂格理论", "《双性恋心理健康白皮书》", "北京同志中心"),
        (OrientationType::Pansexual, Language::Zh) => ("性别流动理论", "《性别多元与社会包容》", "彩虹之家"),
        (OrientationType::Graysexual, Language::Zh) => ("吸引力光谱", "《灰性恋群体心理研究》", "中国无性恋社群"),
        (OrientationType::Asexual, Language::Zh) => ("性取向多元理论", "《无性恋心理健康指南》", "中国无性恋社群"),
        (OrientationType::Skoliosexual, Language::Zh) => ("酷儿性别理论", "《跨性别心理与社会支持》", "跨儿之家"),
        (OrientationType::Objectum, Language::Zh) => ("恋物心理学", "《恋物性取向的心理机制》", "中国心理学会性别心理专委会"),
        (OrientationType::Sapiosexual, Language::Zh) => ("智性吸引理论", "《智性恋与亲密关系》", "彩虹之家"),
    };

    ResourceTriple {
        concept,
        paper,
        org,
    }
}
