use super::Entry;

pub(super) const NATURE: [Entry; 8] = [
    Entry {
        name: "紫薇",
        symbol: "☰",
        description: "帝王之星:天生的尊贵感与主导欲,重视体面与格局。",
        questions: [
            "在团队中,你是否常常自然而然地成为拿主意的人?",
            "你是否很在意别人是否尊重你?",
            "面对混乱的局面,你是否会本能地想去掌控全局?",
            "你是否觉得自己应该做大事,而不是琐碎小事?",
            "被人当众反驳时,你是否会明显感到不快?",
            "你是否习惯照顾身边的人,并希望他们依赖你?",
            "你是否对自己的品味与形象有较高要求?",
            "你是否更愿意做决策,而不是执行细节?",
            "即使压力很大,你是否也不愿在人前示弱?",
        ],
    },
    Entry {
        name: "天机",
        symbol: "☴",
        description: "智慧之星:心思灵动,善于思考与谋划,喜变化。",
        questions: [
            "你是否经常在脑中同时思考好几件事?",
            "遇到问题时,你是否总能很快想到多种解决办法?",
            "你是否对新知识、新事物充满好奇?",
            "你是否容易因为想得太多而难以入睡?",
            "你是否喜欢分析别人行为背后的动机?",
            "一成不变的生活是否会让你感到烦闷?",
            "你是否更擅长出主意,而不是亲自冲在前面?",
            "做决定前,你是否习惯反复推演各种可能?",
            "你是否常被人评价为聪明、反应快?",
        ],
    },
    Entry {
        name: "太阳",
        symbol: "☲",
        description: "光明之星:热情外放,乐于付出,渴望被看见。",
        questions: [
            "你是否乐于主动帮助别人,哪怕对方没有开口?",
            "在人群中,你是否常常是气氛的带动者?",
            "你是否希望自己的付出被别人看见和认可?",
            "你是否很难拒绝别人的请求?",
            "你是否说话直接,不太会拐弯抹角?",
            "你是否对公平正义的事情特别容易激动?",
            "你是否精力充沛,闲不下来?",
            "你是否愿意为了集体的利益牺牲自己的时间?",
            "你是否相信人性本善,容易信任他人?",
        ],
    },
    Entry {
        name: "武曲",
        symbol: "☱",
        description: "将星与财星:果决刚毅,务实重利,执行力强。",
        questions: [
            "你做事是否讲究效率,讨厌拖泥带水?",
            "你是否对金钱和资源的管理很有概念?",
            "决定了的事,你是否很少改变主意?",
            "你是否更相信结果,而不是空谈?",
            "面对冲突,你是否倾向于正面解决?",
            "你是否不太擅长表达温柔的情感?",
            "你是否能够长时间承受高强度的工作?",
            "你是否认为靠自己打拼比依赖别人更可靠?",
            "你是否常被认为严肃、不好接近?",
        ],
    },
    Entry {
        name: "天同",
        symbol: "☵",
        description: "福星:性情温和,知足常乐,重视享受与安逸。",
        questions: [
            "你是否很少与人发生正面冲突?",
            "你是否容易满足于现状?",
            "美食、休闲和舒适的环境对你是否很重要?",
            "遇到不顺心的事,你是否能很快释怀?",
            "你是否不太喜欢竞争激烈的环境?",
            "你是否常被人说像个长不大的孩子?",
            "你是否更愿意跟随别人的安排,而不是自己拿主意?",
            "你是否容易拖延不那么有趣的事情?",
            "你是否觉得快乐比成功更重要?",
        ],
    },
    Entry {
        name: "廉贞",
        symbol: "☳",
        description: "囚星:爱憎分明,原则感强,情绪浓烈而复杂。",
        questions: [
            "你是否爱憎分明,对人的好恶表现得很明显?",
            "你是否对自己认定的原则寸步不让?",
            "你是否容易被强烈的情绪所左右?",
            "你是否对感情投入很深,也容易受伤?",
            "你是否对别人的背叛难以原谅?",
            "你是否具有很强的好胜心?",
            "你是否有时会在理智与欲望之间挣扎?",
            "你是否擅长察觉人际关系中的微妙变化?",
            "你是否觉得自己的内心世界很难被别人真正理解?",
        ],
    },
    Entry {
        name: "天府",
        symbol: "☷",
        description: "库星:稳重包容,善于守成,重视安全感。",
        questions: [
            "你是否做事稳重,不喜欢冒险?",
            "你是否习惯为将来做储备和打算?",
            "你是否能够包容别人的缺点?",
            "你是否更看重长期的稳定而不是短期的收益?",
            "你是否给人一种可靠、让人安心的感觉?",
            "你是否不喜欢频繁更换环境或工作?",
            "你是否擅长维护已有的关系与成果?",
            "你是否在花钱上相对谨慎?",
            "遇到突发事件时,你是否能保持镇定?",
        ],
    },
    Entry {
        name: "太阴",
        symbol: "☶",
        description: "月亮之星:细腻内敛,感受力强,重视内在与家庭。",
        questions: [
            "你是否对周围人情绪的变化非常敏感?",
            "你是否更喜欢安静独处,而不是热闹聚会?",
            "你是否注重细节,追求事物的精致与美感?",
            "你是否很少向别人倾诉自己的心事?",
            "你是否对家人有很深的牵挂?",
            "你是否容易因为一句话而思索很久?",
            "你是否喜欢幻想,内心世界丰富?",
            "你是否习惯默默付出,而不是张扬表现?",
            "你是否在熟悉的人面前和陌生人面前判若两人?",
        ],
    },
];
