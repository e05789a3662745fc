use crate::domain::request::NameFortuneRequest;
use crate::domain::result::NameFortuneResult;
use crate::domain::tier::{Narrative, Tier};
use crate::strokes::StrokeTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameNarrative {
    pub narrative: Narrative,
    pub advice: &'static str,
}

const NAME_NARRATIVES: [NameNarrative; 4] = [
    NameNarrative {
        narrative: Narrative {
            overall: "天・地・人の数が調和した非常に恵まれた画数です。周囲の信頼を集め、大きな運を引き寄せます。",
            love: "人を惹きつける魅力に恵まれています。良縁に結ばれやすく、温かな家庭を築けるでしょう。",
            work: "リーダーとしての資質があります。責任ある立場で実力を発揮し、成功をつかめるでしょう。",
            health: "生命力が強く、心身ともに充実しやすい画数です。",
        },
        advice: "恵まれた運を独り占めせず、周囲に分け与えることでさらに運気が高まります。",
    },
    NameNarrative {
        narrative: Narrative {
            overall: "穏やかで安定した運勢の画数です。堅実な歩みが着実な幸せにつながります。",
            love: "誠実な人柄が好感を呼びます。ゆっくりと信頼関係を育む恋が実を結ぶでしょう。",
            work: "努力がきちんと評価される画数です。専門性を磨くことで道が開けます。",
            health: "大きな不調は少ない画数です。規則正しい生活で好調を保てます。",
        },
        advice: "小さな目標を一つずつ達成していくことが、大きな成果への近道です。",
    },
    NameNarrative {
        narrative: Narrative {
            overall: "良い面と課題の両方を持つ画数です。心がけ次第で運勢を大きく伸ばせます。",
            love: "自分の気持ちを素直に伝えることで、関係がより良い方向へ進みます。",
            work: "器用さを活かせる画数です。一つのことに集中すると成果が出やすくなります。",
            health: "無理が続くと疲れが出やすい画数です。休養を意識して取りましょう。",
        },
        advice: "周囲の意見に耳を傾けつつ、自分の軸をしっかり持つことが開運の鍵です。",
    },
    NameNarrative {
        narrative: Narrative {
            overall: "試練を通して成長する画数です。困難を乗り越えた先に確かな実りがあります。",
            love: "すれ違いが生じやすい面があります。相手を思いやる言葉を大切にしましょう。",
            work: "焦らず準備を重ねることが大切です。慎重さが思わぬ失敗を防ぎます。",
            health: "ストレスを溜め込みやすい画数です。気分転換の時間を意識して作りましょう。",
        },
        advice: "感謝の気持ちを言葉にすることで、人の縁が運気を後押ししてくれます。",
    },
];

pub fn name_narrative(tier: Tier) -> &'static NameNarrative {
    &NAME_NARRATIVES[tier.index()]
}

/// Applies the person-number correction: values above 20 lose 10 exactly
/// once, so e.g. 35 becomes 25 rather than wrapping further.
pub fn clamp_person_number(raw: u32) -> u32 {
    if raw > 20 {
        raw - 10
    } else {
        raw
    }
}

pub fn person_number(heaven_number: u32, earth_number: u32) -> u32 {
    clamp_person_number(heaven_number % 10 + earth_number % 10)
}

pub fn generate_name_fortune(request: &NameFortuneRequest) -> NameFortuneResult {
    generate_name_fortune_with(StrokeTable::global(), request)
}

pub fn generate_name_fortune_with(table: &StrokeTable, request: &NameFortuneRequest) -> NameFortuneResult {
    let family_name_strokes = table.count(&request.family_name);
    let given_name_strokes = table.count(&request.given_name);

    let heaven_number = family_name_strokes;
    let earth_number = given_name_strokes;
    let total_number = family_name_strokes + given_name_strokes;
    let person_number = person_number(heaven_number, earth_number);

    let tier = Tier::from_index(u64::from(total_number));
    let text = name_narrative(tier);

    tracing::debug!(
        family_name_strokes,
        given_name_strokes,
        person_number,
        total_number,
        rating = %tier,
        "generated name fortune"
    );

    NameFortuneResult {
        family_name_strokes,
        given_name_strokes,
        heaven_number,
        earth_number,
        person_number,
        total_number,
        rating: tier,
        rating_text: tier.glyph().to_string(),
        overall: text.narrative.overall.to_string(),
        love: text.narrative.love.to_string(),
        work: text.narrative.work.to_string(),
        health: text.narrative.health.to_string(),
        advice: text.advice.to_string(),
    }
}
