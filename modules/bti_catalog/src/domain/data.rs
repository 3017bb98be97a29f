use crate::contract::model::{PatternStyle, SystemColor};

/// Source record of a built-in card.
#[derive(Debug, Clone, Copy)]
pub struct CardSeed {
    pub code: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub tags: [&'static str; 4],
    pub gradient: [(SystemColor, f32); 2],
    pub pattern: PatternStyle,
}

use PatternStyle::{Classic, Dynamic, Elegant, Minimal};
use SystemColor::{Blue, Brown, Cyan, Green, Mint, Orange, Pink, Red, Teal, Yellow};

pub const BUILTIN_CARDS: [CardSeed; 16] = [
    // F + A
    CardSeed {
        code: "FAHV",
        title: "The Spice Hunter",
        description: "매운 음식을 정복하는 맛 사냥꾼",
        tags: ["자극적인", "모험적인", "딱딱한", "가성비"],
        gradient: [(Red, 0.7), (Orange, 0.4)],
        pattern: Dynamic,
    },
    CardSeed {
        code: "FAHP",
        title: "Fine Flavor Explorer",
        description: "프리미엄 자극의 모험가",
        tags: ["자극적인", "모험적인", "딱딱한", "품격"],
        gradient: [(Red, 0.6), (Pink, 0.4)],
        pattern: Dynamic,
    },
    CardSeed {
        code: "FASV",
        title: "Bouncy Bargain Seeker",
        description: "부드럽게 만나는 가성비 탐험가",
        tags: ["자극적인", "모험적인", "말캉한", "가성비"],
        gradient: [(Orange, 0.7), (Yellow, 0.4)],
        pattern: Dynamic,
    },
    CardSeed {
        code: "FASP",
        title: "Silk Road Pioneer",
        description: "부드러운 맛의 럭셔리 여행자",
        tags: ["자극적인", "모험적인", "말캉한", "품격"],
        gradient: [(Red, 0.6), (Orange, 0.3)],
        pattern: Dynamic,
    },
    // F + T
    CardSeed {
        code: "FTHV",
        title: "Crispy Value Guardian",
        description: "바삭한 맛의 가성비 수호자",
        tags: ["자극적인", "보수적인", "딱딱한", "가성비"],
        gradient: [(Orange, 0.6), (Brown, 0.3)],
        pattern: Elegant,
    },
    CardSeed {
        code: "FTHP",
        title: "Traditional Spice Artisan",
        description: "전통 있는 매운맛의 장인",
        tags: ["자극적인", "보수적인", "딱딱한", "품격"],
        gradient: [(Brown, 0.6), (Orange, 0.3)],
        pattern: Elegant,
    },
    CardSeed {
        code: "FTSV",
        title: "Soft Spice Economist",
        description: "부드러운 자극의 실속파",
        tags: ["자극적인", "보수적인", "말캉한", "가성비"],
        gradient: [(Orange, 0.5), (Yellow, 0.3)],
        pattern: Elegant,
    },
    CardSeed {
        code: "FTSP",
        title: "Premium Comfort Master",
        description: "고급스러운 편안함의 달인",
        tags: ["자극적인", "보수적인", "말캉한", "품격"],
        gradient: [(Brown, 0.5), (Orange, 0.3)],
        pattern: Elegant,
    },
    // C + A
    CardSeed {
        code: "CAHV",
        title: "Fresh Adventure Scout",
        description: "깔끔한 맛의 모험 스카우트",
        tags: ["깔끔한", "모험적인", "딱딱한", "가성비"],
        gradient: [(Blue, 0.6), (Mint, 0.3)],
        pattern: Minimal,
    },
    CardSeed {
        code: "CAHP",
        title: "Pure Luxury Wanderer",
        description: "깔끔한 맛의 고급 유랑가",
        tags: ["깔끔한", "모험적인", "딱딱한", "품격"],
        gradient: [(Blue, 0.5), (Cyan, 0.3)],
        pattern: Minimal,
    },
    CardSeed {
        code: "CASV",
        title: "Smooth Deal Hunter",
        description: "부드러운 가성비의 사냥꾼",
        tags: ["깔끔한", "모험적인", "말캉한", "가성비"],
        gradient: [(Cyan, 0.6), (Mint, 0.3)],
        pattern: Minimal,
    },
    CardSeed {
        code: "CASP",
        title: "Elegant Taste Curator",
        description: "우아한 맛의 큐레이터",
        tags: ["깔끔한", "모험적인", "말캉한", "품격"],
        gradient: [(Teal, 0.6), (Blue, 0.3)],
        pattern: Minimal,
    },
    // C + T
    CardSeed {
        code: "CTHV",
        title: "Classic Value Expert",
        description: "전통적 가치의 전문가",
        tags: ["깔끔한", "보수적인", "딱딱한", "가성비"],
        gradient: [(Green, 0.6), (Mint, 0.3)],
        pattern: Classic,
    },
    CardSeed {
        code: "CTHP",
        title: "Noble Taste Keeper",
        description: "고귀한 맛의 수호자",
        tags: ["깔끔한", "보수적인", "딱딱한", "품격"],
        gradient: [(Green, 0.5), (Teal, 0.3)],
        pattern: Classic,
    },
    CardSeed {
        code: "CTSV",
        title: "Gentle Savings Guru",
        description: "부드러운 실속의 구루",
        tags: ["깔끔한", "보수적인", "말캉한", "가성비"],
        gradient: [(Mint, 0.6), (Green, 0.3)],
        pattern: Classic,
    },
    CardSeed {
        code: "CTSP",
        title: "The Clean Aristocrat",
        description: "깔끔한 맛의 귀족",
        tags: ["깔끔한", "보수적인", "말캉한", "품격"],
        gradient: [(Teal, 0.5), (Mint, 0.3)],
        pattern: Classic,
    },
];
