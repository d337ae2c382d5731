use super::Entry;

pub(super) const PERSONALITY: [Entry; 8] = [
    Entry {
        name: "君主",
        symbol: "☰",
        description: "统御型人格:以责任与权威立身,习惯为整体负责。",
        questions: [
            "在工作或家庭中,你是否承担着最终拍板的角色?",
            "你是否认为规矩和秩序是必需的?",
            "你是否习惯从全局出发考虑问题?",
            "你是否能够坦然承担失败的责任?",
            "你是否擅长把合适的人放在合适的位置上?",
            "你是否很少向下属或晚辈抱怨?",
            "你是否重视自己的承诺,说到做到?",
            "你是否在意别人是否服从你的安排?",
            "你是否觉得自己肩上的担子比别人更重?",
        ],
    },
    Entry {
        name: "谋士",
        symbol: "☴",
        description: "策划型人格:凭借见识与策略影响局势,重谋略轻蛮干。",
        questions: [
            "你是否习惯在行动前先制定周密的计划?",
            "你是否擅长发现别人忽略的风险?",
            "你是否更愿意在幕后出谋划策?",
            "你是否会为不同情况准备备选方案?",
            "你是否喜欢研究历史、商业或人性?",
            "你是否能冷静地看待别人的情绪化反应?",
            "你是否经常被朋友请教意见?",
            "你是否相信方法比努力更重要?",
            "你是否擅长用言语说服别人?",
        ],
    },
    Entry {
        name: "将军",
        symbol: "☳",
        description: "开拓型人格:行动迅速,敢于冲锋,在挑战中成长。",
        questions: [
            "面对困难,你是否第一反应是迎上去?",
            "你是否享受竞争和挑战带来的刺激?",
            "你是否决策果断,很少犹豫?",
            "你是否能在压力下带领团队完成任务?",
            "你是否讨厌长时间的空谈与会议?",
            "你是否愿意为了目标承担较大的风险?",
            "你是否在身体或意志上都很能吃苦?",
            "你是否常常冲在最前面?",
            "你是否认为胜利比过程更重要?",
        ],
    },
    Entry {
        name: "商贾",
        symbol: "☱",
        description: "经营型人格:善于交换与经营,敏锐把握利益与机会。",
        questions: [
            "你是否对价格、成本和收益很敏感?",
            "你是否善于发现赚钱或获利的机会?",
            "你是否擅长与不同类型的人打交道?",
            "你是否在谈判中很少吃亏?",
            "你是否习惯衡量一件事情是否值得?",
            "你是否愿意为了长远利益暂时让步?",
            "你是否维护着广泛的人脉关系?",
            "你是否认为一切都可以商量?",
            "你是否能够灵活调整自己的立场?",
        ],
    },
    Entry {
        name: "学者",
        symbol: "☶",
        description: "求知型人格:专注钻研,追求真理与专业深度。",
        questions: [
            "你是否能长时间专注于一个问题?",
            "你是否对自己专业领域的知识追求精深?",
            "你是否喜欢阅读和独立思考?",
            "你是否对不严谨的说法难以容忍?",
            "你是否更看重观点是否正确,而不是谁提出的?",
            "你是否不太擅长应酬和寒暄?",
            "你是否经常记录、整理自己的想法?",
            "你是否愿意为弄清一个问题花费大量时间?",
            "你是否觉得知识本身就是一种回报?",
        ],
    },
    Entry {
        name: "艺术家",
        symbol: "☲",
        description: "表达型人格:重视感受与创造,以美与个性表达自我。",
        questions: [
            "你是否对色彩、声音或文字特别敏感?",
            "你是否需要通过某种方式表达内心的感受?",
            "你是否讨厌千篇一律、循规蹈矩?",
            "你是否常有突如其来的灵感?",
            "你是否情绪起伏比较明显?",
            "你是否更在意作品的感觉,而不是它能否赚钱?",
            "你是否愿意为喜欢的事情废寝忘食?",
            "你是否觉得自己和周围的人有些不同?",
            "你是否追求生活中的仪式感?",
        ],
    },
    Entry {
        name: "侠客",
        symbol: "☵",
        description: "义气型人格:重情重义,崇尚自由,路见不平愿出手。",
        questions: [
            "朋友有难时,你是否会毫不犹豫地出手相助?",
            "你是否看不惯恃强凌弱的行为?",
            "你是否向往无拘无束的生活?",
            "你是否把义气看得比利益更重?",
            "你是否不喜欢被规则和制度束缚?",
            "你是否愿意为了信念与众人对立?",
            "你是否结交了各行各业的朋友?",
            "你是否做事凭直觉和良心,而不是算计?",
            "你是否宁可吃亏也不愿欠人情?",
        ],
    },
    Entry {
        name: "隐士",
        symbol: "☷",
        description: "退守型人格:淡泊名利,重视内心的清净与独立。",
        questions: [
            "你是否对名利看得比较淡?",
            "你是否享受独处的时光?",
            "你是否刻意远离复杂的人际纷争?",
            "你是否对物质生活要求不高?",
            "你是否经常思考人生的意义?",
            "你是否很少主动争取机会?",
            "你是否喜欢亲近自然?",
            "你是否觉得大多数社交是在消耗自己?",
            "你是否更愿意按照自己的节奏生活?",
        ],
    },
];
