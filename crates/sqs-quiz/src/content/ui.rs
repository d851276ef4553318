use crate::locale::Language;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct UiText {
    pub logo_title: &'static str,
    pub home: HomeText,
    pub test: TestText,
    pub results: ResultsText,
    pub nav: NavText,
    pub footer: FooterText,
    pub types: TypesText,
    pub profile: ProfileText,
}

#[derive(Debug, Serialize)]
pub struct HomeText {
    pub title: &'static str,
    pub desc: &'static str,
    pub start: &'static str,
    pub intro: &'static str,
    pub features: [FeatureText; 3],
}

#[derive(Debug, Serialize)]
pub struct FeatureText {
    pub title: &'static str,
    pub desc: &'static str,
}

#[derive(Debug, Serialize)]
pub struct TestText {
    pub title: &'static str,
    pub next: &'static str,
    pub submit: &'static str,
    pub required: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ResultsText {
    pub title: &'static str,
    pub warning: &'static str,
    pub radar_title: &'static str,
    pub radar_note: &'static str,
    pub type_def: &'static str,
    pub story: &'static str,
    pub features: &'static str,
    pub advice: &'static str,
    pub color_card: &'static str,
    pub your_type: &'static str,
    pub story_line: &'static str,
    pub suppressed_title: &'static str,
    pub coming_out_title: &'static str,
    pub fluidity_title: &'static str,
    pub dashboard: &'static str,
    pub dashboard_note: &'static str,
    pub resource: &'static str,
    pub retest: &'static str,
    pub save: &'static str,
    pub storyline_labels: StorylineLabels,
    pub resource_labels: ResourceLabels,
    /// `{region}`, `{city}` and `{score}` are substituted.
    pub location_template: &'static str,
    pub fetching_location: &'static str,
    pub close: &'static str,
    /// `{type}` is substituted.
    pub view_type_intro: &'static str,
    pub score_unit: &'static str,
    pub score_default: &'static str,
}

#[derive(Debug, Serialize)]
pub struct StorylineLabels {
    pub suppressed: &'static str,
    pub coming_out: &'static str,
    pub fluidity: &'static str,
    pub risk: &'static str,
    pub opportunity: &'static str,
    pub suggestion: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ResourceLabels {
    pub concept: &'static str,
    pub paper: &'static str,
    pub org: &'static str,
}

#[derive(Debug, Serialize)]
pub struct NavText {
    pub home: &'static str,
    pub test: &'static str,
    pub types: &'static str,
    pub profile: &'static str,
}

#[derive(Debug, Serialize)]
pub struct FooterText {
    pub about_title: &'static str,
    pub about_desc: &'static str,
    pub contact_title: &'static str,
    pub contact_email: &'static str,
    pub social_title: &'static str,
    pub wechat: &'static str,
    pub weibo: &'static str,
    pub copyright: &'static str,
}

#[derive(Debug, Serialize)]
pub struct TypesText {
    pub main_group: &'static str,
    pub diverse_group: &'static str,
    pub special_group: &'static str,
    pub definition: &'static str,
    pub challenges: &'static str,
    pub misunderstandings: &'static str,
    pub recommendations: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ProfileText {
    pub title: &'static str,
    pub history: &'static str,
    pub empty: &'static str,
    pub view_details: &'static str,
}

pub fn ui_text(language: Language) -> &'static UiText {
    match language {
        Language::Zh => &ZH,
        Language::En => &EN,
    }
}

static EN: UiText = UiText {
    logo_title: "SQS Sexual Orientation Test",
    home: HomeText {
        title: "Explore Your Sexual Orientation for Free",
        desc: "Our professional test helps you better understand your sexual orientation and expression. Just 3 minutes for an in-depth personal analysis report.",
        start: "Start Test",
        intro: "The SQS Sexual Orientation Awareness Test is a self-assessment tool developed based on psychological and sociological theories, designed to help users scientifically and rationally explore their emotional attraction, relationship patterns, and identity. The results are for self-awareness only, not for medical or legal diagnosis. If you have doubts or need support, please seek professional psychological counseling or LGBTQ+ organizations.",
        features: [
            FeatureText {
                title: "Professional Analysis",
                desc: "Based on psychological and sexual orientation research, we provide a professional analysis report.",
            },
            FeatureText {
                title: "Privacy Protection",
                desc: "We strictly protect your privacy. All test data is encrypted.",
            },
            FeatureText {
                title: "Continuous Support",
                desc: "We offer follow-up consulting services to help you better understand and accept yourself.",
            },
        ],
    },
    test: TestText {
        title: "Sexual Orientation Awareness Test",
        next: "Next Section",
        submit: "View Results",
        required: "Please complete all questions on this page before continuing.",
    },
    results: ResultsText {
        title: "Your Test Result",
        warning: "This result is for reference only. Sexual orientation is a fluid and diverse self-identity and cannot be simply defined. For professional support, please contact a counselor or LGBTQ+ organization. (If you feel offended, please ignore, just for fun. Wish you a happy life!)",
        radar_title: "Sexual Orientation Radar Chart",
        radar_note: "This chart is based on your real answers and reflects your multi-dimensional orientation tendencies.",
        type_def: "Type Definition",
        story: "Famous People / Stories",
        features: "Main Features",
        advice: "Life Advice",
        color_card: "Orientation Color Cards",
        your_type: "← Your Type",
        story_line: "Parallel World Storylines",
        suppressed_title: "Suppressed Identity Trajectory",
        coming_out_title: "Coming Out Social Cost Calculator",
        fluidity_title: "Orientation Fluidity Sandbox",
        dashboard: "Survival Probability Dashboard",
        dashboard_note: "(For reference only, calculated by anti-discrimination law index and LGBTQ+ crime rate)",
        resource: "Resource Neural Network",
        retest: "Retake Test",
        save: "Save Result",
        storyline_labels: StorylineLabels {
            suppressed: "Suppressed",
            coming_out: "Coming Out",
            fluidity: "Fluidity",
            risk: "Risk",
            opportunity: "Opportunity",
            suggestion: "Suggestion",
        },
        resource_labels: ResourceLabels {
            concept: "Psychological Concept",
            paper: "Academic Paper",
            org: "Support Organization",
        },
        location_template: "Safety index for coming out in {region}{city}: {score}/100",
        fetching_location: "Fetching location...",
        close: "Close",
        view_type_intro: "View {type} introduction",
        score_unit: "/100",
        score_default: "--",
    },
    nav: NavText {
        home: "Home",
        test: "Test",
        types: "Orientation Types",
        profile: "Profile",
    },
    footer: FooterText {
        about_title: "About Us",
        about_desc: "We are dedicated to providing professional sexual orientation testing services to help people better understand themselves.",
        contact_title: "Contact",
        contact_email: "Email: 446675781@qq.com",
        social_title: "Follow Us",
        wechat: "WeChat",
        weibo: "Weibo",
        copyright: "© 2025 Sexual Orientation Test. All rights reserved.",
    },
    types: TypesText {
        main_group: "Main Orientations",
        diverse_group: "Diverse Orientations",
        special_group: "Special Orientations",
        definition: "Type Definition",
        challenges: "Current Status/Challenges",
        misunderstandings: "Common Misconceptions",
        recommendations: "Life Recommendations",
    },
    profile: ProfileText {
        title: "Profile",
        history: "Test History",
        empty: "No completed tests in this session yet.",
        view_details: "View Details",
    },
};

static ZH: UiText = UiText {
    logo_title: "性取向测试",
    home: HomeText {
        title: "免费探索你的性别认同",
        desc: "通过我们的专业测试，帮助你更好地了解自己的性别认同和表达方式。只需3分钟，获得深入的个人分析报告。",
        start: "开始测试",
        intro: "SQS性取向认知测试是一款基于心理学与社会学理论开发的自我评估工具，帮助用户科学、理性地探索自己的情感吸引、关系模式与身份认同。测试结果仅供自我认知参考，不作为医学或法律诊断依据。如有疑问或需要支持，请寻求专业心理咨询或LGBTQ+组织的帮助。",
        features: [
            FeatureText {
                title: "专业分析",
                desc: "基于心理学研究和性别研究理论，提供专业的分析报告。",
            },
            FeatureText {
                title: "隐私保护",
                desc: "我们严格保护您的隐私，所有测试数据都经过加密处理。",
            },
            FeatureText {
                title: "持续支持",
                desc: "提供后续咨询服务，帮助您更好地理解和接纳自己。",
            },
        ],
    },
    test: TestText {
        title: "性取向认知测试",
        next: "下一部分",
        submit: "查看结果",
        required: "请先完成本页所有题目再继续。",
    },
    results: ResultsText {
        title: "你的测试结果",
        warning: "本结果仅供参考。性取向是流动且多元的自我认同，无法被简单定义。如需专业支持，请联系心理咨询师或LGBTQ+组织。（如有冒犯请忽略，仅供娱乐，祝你生活愉快！）",
        radar_title: "性取向雷达图",
        radar_note: "该图基于你的真实作答，反映你的多维取向倾向。",
        type_def: "类型定义",
        story: "名人 / 故事",
        features: "主要特征",
        advice: "生活建议",
        color_card: "性取向类型色卡对照表",
        your_type: "← 你的类型",
        story_line: "平行世界故事线",
        suppressed_title: "压抑身份轨迹",
        coming_out_title: "出柜社会成本计算器",
        fluidity_title: "取向流动沙盒",
        dashboard: "生存概率仪表盘",
        dashboard_note: "（仅供参考，基于反歧视法律指数与LGBTQ+犯罪率计算）",
        resource: "资源神经网络",
        retest: "重新测试",
        save: "保存结果",
        storyline_labels: StorylineLabels {
            suppressed: "压抑",
            coming_out: "出柜",
            fluidity: "流动",
            risk: "风险",
            opportunity: "机遇",
            suggestion: "建议",
        },
        resource_labels: ResourceLabels {
            concept: "心理学概念",
            paper: "学术论文",
            org: "支持组织",
        },
        location_template: "{region}{city}的出柜安全指数：{score}/100",
        fetching_location: "正在获取位置...",
        close: "关闭",
        view_type_intro: "查看{type}介绍",
        score_unit: "/100",
        score_default: "--",
    },
    nav: NavText {
        home: "首页",
        test: "测试",
        types: "性取向类型",
        profile: "个人中心",
    },
    footer: FooterText {
        about_title: "关于我们",
        about_desc: "我们致力于提供专业的性别认同测试服务，帮助人们更好地了解自己。",
        contact_title: "联系方式",
        contact_email: "邮箱：446675781@qq.com",
        social_title: "关注我们",
        wechat: "微信",
        weibo: "微博",
        copyright: "© 2025 性别测试. All rights reserved.",
    },
    types: TypesText {
        main_group: "主流取向",
        diverse_group: "多元取向",
        special_group: "特殊取向",
        definition: "类型定义",
        challenges: "现状/挑战",
        misunderstandings: "常见误解",
        recommendations: "生活建议",
    },
    profile: ProfileText {
        title: "个人中心",
        history: "测试历史",
        empty: "本次会话暂无已完成的测试。",
        view_details: "查看详情",
    },
};
