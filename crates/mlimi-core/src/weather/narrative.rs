use super::blocks::{summarize_blocks, BlockSummary};
use crate::model::DayForecast;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Render one day as a date line followed by one line per populated block.
///
/// A day without any parsable hour renders as the bare date line.
pub fn daily_narrative(day: &DayForecast) -> String {
    let mut paragraph = format!("{}:\n", day.date);

    let Some(blocks) = summarize_blocks(day) else {
        return paragraph.trim().to_string();
    };

    for summary in &blocks {
        paragraph.push_str(&block_line(summary));
        paragraph.push('\n');
    }

    paragraph.trim().to_string()
}

/// Render a whole week as one cleaned paragraph.
pub fn weekly_narrative(days: &[DayForecast]) -> String {
    let paragraphs: Vec<String> = days.iter().map(daily_narrative).collect();
    clean_text(&paragraphs.join("\n\n"))
}

fn block_line(s: &BlockSummary) -> String {
    format!(
        "{}: {} with temperatures from {} to {}, {}, {}. {}",
        s.block,
        s.temperature,
        one_decimal(s.min_temp),
        one_decimal(s.max_temp),
        s.rainfall.description(),
        s.wind.description(),
        s.advice.sentence()
    )
}

/// One decimal place, rounded as the nearest binary float would round.
/// "24.15" renders as "24.1" and "24.05" as "24.1".
fn one_decimal(value: Decimal) -> String {
    if let Some(v) = value.to_f64() {
        return format!("{v:.1}");
    }
    let mut rounded = value.round_dp_with_strategy(1, RoundingStrategy::MidpointNearestEven);
    rounded.rescale(1);
    rounded.to_string()
}

/// Keep letters, digits, whitespace and `.,:;!?`, then collapse whitespace.
pub fn clean_text(text: &str) -> String {
    let kept: String = text
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || ".,:;!?".contains(*c))
        .collect();
    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SubDailyReading;
    use rust_decimal_macros::dec;

    fn reading(hour: u32, max: Decimal, min: Decimal, rain: Decimal, wind: Decimal) -> SubDailyReading {
        SubDailyReading {
            hour: Some(hour),
            max_temp: Some(max),
            min_temp: Some(min),
            rainfall_mm: rain,
            wind_speed: wind,
        }
    }

    #[test]
    fn test_daily_narrative_lines() {
        let day = DayForecast {
            date: "Sunday 21 December".into(),
            rows: vec![
                reading(6, dec!(21), dec!(17.25), dec!(0), dec!(3)),
                reading(9, dec!(26), dec!(19), dec!(0.2), dec!(4)),
                reading(15, dec!(31), dec!(24), dec!(12), dec!(20)),
            ],
        };
        let text = daily_narrative(&day);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Sunday 21 December:");
        assert_eq!(
            lines[1],
            "Morning: hot with temperatures from 17.2 to 26.0, almost no rainfall, making it \
             suitable for fieldwork, very light winds. Good day for fieldwork, planting, or crop maintenance."
        );
        assert_eq!(lines.len(), 3);
        assert!(lines[2].starts_with("Afternoon: very hot with temperatures from 24.0 to 31.0"));
        assert!(lines[2].contains("heavy rain; fields may be waterlogged"));
        assert!(lines[2].contains("strong winds; take precautions"));
        assert!(lines[2].ends_with("Delay activities."));
    }

    #[test]
    fn test_one_decimal_follows_float_rounding() {
        assert_eq!(one_decimal(dec!(24.15)), "24.1");
        assert_eq!(one_decimal(dec!(24.05)), "24.1");
        assert_eq!(one_decimal(dec!(17.25)), "17.2");
        assert_eq!(one_decimal(dec!(31)), "31.0");
        assert_eq!(one_decimal(dec!(-3.46)), "-3.5");
    }

    #[test]
    fn test_daily_without_hours_is_bare_date() {
        let mut r = reading(0, dec!(20), dec!(15), dec!(0), dec!(0));
        r.hour = None;
        let day = DayForecast {
            date: "Monday 22 December".into(),
            rows: vec![r],
        };
        assert_eq!(daily_narrative(&day), "Monday 22 December:");
    }

    #[test]
    fn test_clean_text_strips_markup_and_symbols() {
        assert_eq!(
            clean_text("**Monday**:\n  warm 20°C — dry!"),
            "Monday: warm 20C dry!"
        );
        assert_eq!(clean_text("snake_case *emphasis*"), "snakecase emphasis");
    }

    #[test]
    fn test_clean_text_plain_input_only_collapses_whitespace() {
        let plain = "Morning: warm, light rain.  Plan   carefully;\nok?";
        assert_eq!(clean_text(plain), "Morning: warm, light rain. Plan carefully; ok?");
    }

    #[test]
    fn test_weekly_joins_days() {
        let days = vec![
            DayForecast {
                date: "Sunday 21 December".into(),
                rows: vec![reading(9, dec!(22), dec!(16), dec!(3), dec!(8))],
            },
            DayForecast {
                date: "Monday 22 December".into(),
                rows: vec![],
            },
        ];
        let week = weekly_narrative(&days);
        assert!(week.starts_with("Sunday 21 December: Morning: warm with temperatures from 16.0 to 22.0"));
        assert!(week.ends_with("Monday 22 December:"));
        assert!(!week.contains('\n'));
    }
}
