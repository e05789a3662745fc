use crate::domain::element::Element;
use crate::domain::request::FortuneRequest;
use crate::domain::result::{DailyFortuneEntry, WeeklyFortune};
use crate::domain::tier::{Narrative, Tier};
use crate::time::day_label;
use chrono::{Datelike, NaiveDate};

pub const DAYS_PER_READING: usize = 7;

const WEEKLY_NARRATIVES: [Narrative; 4] = [
    Narrative {
        overall: "運気が最高潮に達しています。積極的な行動で大きな成果が期待できるでしょう。",
        love: "恋愛面で嬉しい出来事が起こりそうです。告白や重要な話し合いに良い日です。",
        work: "仕事では大きなチャンスが訪れるかもしれません。自信を持って取り組みましょう。",
        health: "体調も良好で、エネルギーに満ちあふれています。",
    },
    Narrative {
        overall: "安定した運気で、計画していたことを進めるのに適しています。",
        love: "穏やかな恋愛運です。相手との関係を深めるのに良い日でしょう。",
        work: "着実に成果を上げることができそうです。丁寧な作業を心がけましょう。",
        health: "健康状態は良好です。適度な運動を取り入れるとさらに良いでしょう。",
    },
    Narrative {
        overall: "普通の運気です。無理をせず、現状維持を心がけると良いでしょう。",
        love: "恋愛面では特に大きな変化はありませんが、小さな心遣いが大切です。",
        work: "地道な努力が後々実を結ぶでしょう。焦らず着実に進めてください。",
        health: "体調管理に注意が必要です。十分な休息を取りましょう。",
    },
    Narrative {
        overall: "少し運気が下がり気味です。新しいことは避け、慎重に行動しましょう。",
        love: "恋愛面では誤解が生じやすい日です。コミュニケーションを大切にしてください。",
        work: "仕事では思わぬトラブルが発生するかもしれません。冷静な対応を心がけましょう。",
        health: "疲れが溜まりやすい日です。無理をせず、早めの休息を取りましょう。",
    },
];

pub fn weekly_narrative(tier: Tier) -> &'static Narrative {
    &WEEKLY_NARRATIVES[tier.index()]
}

pub fn birth_sum(birth_date: NaiveDate) -> i64 {
    i64::from(birth_date.year()) + i64::from(birth_date.month()) + i64::from(birth_date.day())
}

pub fn primary_element(birth_date: NaiveDate) -> Element {
    Element::from_cycle_index(birth_sum(birth_date))
}

/// `|days since birth + day of month| mod 4`.
pub fn fortune_index(birth_date: NaiveDate, current_date: NaiveDate) -> u64 {
    let day_diff = (current_date - birth_date).num_days();
    (day_diff + i64::from(current_date.day())).unsigned_abs() % 4
}

pub fn daily_fortune(birth_date: NaiveDate, current_date: NaiveDate, offset: usize) -> DailyFortuneEntry {
    let tier = Tier::from_index(fortune_index(birth_date, current_date));
    let text = weekly_narrative(tier);
    DailyFortuneEntry {
        label: day_label(current_date, offset),
        date: current_date,
        rating: tier,
        rating_text: tier.glyph().to_string(),
        overall: text.overall.to_string(),
        love: text.love.to_string(),
        work: text.work.to_string(),
        health: text.health.to_string(),
    }
}

/// Readings for `today` and the six days after it.
pub fn generate_weekly_fortune(request: &FortuneRequest, today: NaiveDate) -> WeeklyFortune {
    let primary_element = primary_element(request.birth_date);

    let days: Vec<DailyFortuneEntry> = today
        .iter_days()
        .take(DAYS_PER_READING)
        .enumerate()
        .map(|(offset, date)| daily_fortune(request.birth_date, date, offset))
        .collect();

    tracing::debug!(
        birth_date = %request.birth_date,
        %today,
        element = %primary_element,
        days = days.len(),
        "generated weekly fortune"
    );

    WeeklyFortune {
        primary_element,
        days,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn request(birth_date: NaiveDate) -> FortuneRequest {
        FortuneRequest {
            birth_date,
            birth_time: None,
            prefecture: "大阪府".to_string(),
            gender: "male".to_string(),
        }
    }

    #[test]
    fn produces_seven_ordered_days() {
        let today = date(2026, 10, 15);
        let fortune = generate_weekly_fortune(&request(date(1990, 5, 3)), today);
        assert_eq!(fortune.days.len(), 7);
        for (i, day) in fortune.days.iter().enumerate() {
            assert_eq!(day.date, today + chrono::Duration::days(i as i64));
        }
    }

    #[test]
    fn only_first_two_labels_are_prefixed() {
        let fortune = generate_weekly_fortune(&request(date(1990, 5, 3)), date(2026, 10, 15));
        assert_eq!(fortune.days[0].label, "今日 (10月15日 木曜日)");
        assert_eq!(fortune.days[1].label, "明日 (10月16日 金曜日)");
        for day in &fortune.days[2..] {
            assert!(!day.label.starts_with("今日") && !day.label.starts_with("明日"));
        }
        assert_eq!(fortune.days[2].label, "10月17日 (土曜日)");
    }

    #[test]
    fn same_day_birth_date_example() {
        // day_diff 0 + day 15 = 15 -> 3 (poor); next day 1 + 16 = 17 -> 1 (good)
        let birth = date(2024, 1, 15);
        let fortune = generate_weekly_fortune(&request(birth), birth);
        assert_eq!(fortune.days[0].label, "今日 (1月15日 月曜日)");
        assert_eq!(fortune.days[0].rating, Tier::Poor);
        assert_eq!(fortune.days[0].rating_text, "小吉");
        assert_eq!(fortune.days[0].overall, WEEKLY_NARRATIVES[3].overall);
        assert_eq!(fortune.days[1].rating, Tier::Good);
        assert_eq!(fortune.days[1].health, WEEKLY_NARRATIVES[1].health);
    }

    #[test]
    fn fixed_reference_date_example() {
        // 2024-01-15 -> 2026-10-15 is 1004 days; 1004 + 15 = 1019 -> 3
        let birth = date(2024, 1, 15);
        let today = date(2026, 10, 15);
        assert_eq!((today - birth).num_days(), 1004);
        assert_eq!(fortune_index(birth, today), 3);
        // 1005 + 16 = 1021 -> 1
        assert_eq!(fortune_index(birth, date(2026, 10, 16)), 1);

        let fortune = generate_weekly_fortune(&request(birth), today);
        assert_eq!(fortune.days[0].rating, Tier::Poor);
        assert_eq!(fortune.days[1].rating, Tier::Good);
        assert_eq!(fortune.days[1].love, weekly_narrative(Tier::Good).love);
    }

    #[test]
    fn future_birth_date_uses_absolute_value() {
        // -10 + 15 = 5 -> 1; -20 + 5 = -15 -> 15 -> 3
        let birth = date(2026, 10, 25);
        assert_eq!(fortune_index(birth, date(2026, 10, 15)), 1);
        assert_eq!(fortune_index(date(2026, 10, 25), date(2026, 10, 5)), 3);
    }

    #[test]
    fn fortune_index_always_in_range() {
        let today = date(2026, 10, 15);
        for offset in 0..2000 {
            let birth = date(1950, 1, 1) + chrono::Duration::days(offset * 17);
            assert!(fortune_index(birth, today) < 4);
        }
    }

    #[test]
    fn every_tier_has_complete_text() {
        for tier in Tier::ALL {
            let n = weekly_narrative(tier);
            assert!(!n.overall.is_empty());
            assert!(!n.love.is_empty());
            assert!(!n.work.is_empty());
            assert!(!n.health.is_empty());
        }
    }

    #[test]
    fn primary_element_follows_birth_sum() {
        // 2024 + 1 + 15 = 2040 -> 0
        assert_eq!(birth_sum(date(2024, 1, 15)), 2040);
        assert_eq!(primary_element(date(2024, 1, 15)), Element::Wood);
        // 1990 + 5 + 3 = 1998 -> 3
        assert_eq!(primary_element(date(1990, 5, 3)), Element::Metal);
    }

    #[test]
    fn gender_and_place_do_not_change_the_reading() {
        let today = date(2026, 10, 15);
        let a = generate_weekly_fortune(&request(date(2000, 2, 29)), today);
        let mut other = request(date(2000, 2, 29));
        other.gender = "female".to_string();
        other.prefecture = "沖縄県".to_string();
        other.birth_time = Some("23:59".to_string());
        assert_eq!(a, generate_weekly_fortune(&other, today));
    }
}
