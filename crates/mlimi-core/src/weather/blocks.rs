use crate::bands::{FieldworkAdvice, RainfallBand, TemperatureBand, WindBand};
use crate::model::{DayForecast, SubDailyReading};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// Named part of the day with a fixed hour range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeBlock {
    EarlyMorning,
    Morning,
    Noon,
    Afternoon,
    Evening,
    Night,
}

impl TimeBlock {
    pub const ALL: [TimeBlock; 6] = [
        TimeBlock::EarlyMorning,
        TimeBlock::Morning,
        TimeBlock::Noon,
        TimeBlock::Afternoon,
        TimeBlock::Evening,
        TimeBlock::Night,
    ];

    pub fn hours(self) -> Range<u32> {
        match self {
            TimeBlock::EarlyMorning => 0..6,
            TimeBlock::Morning => 6..12,
            TimeBlock::Noon => 12..15,
            TimeBlock::Afternoon => 15..18,
            TimeBlock::Evening => 18..21,
            TimeBlock::Night => 21..24,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TimeBlock::EarlyMorning => "Early morning",
            TimeBlock::Morning => "Morning",
            TimeBlock::Noon => "Noon",
            TimeBlock::Afternoon => "Afternoon",
            TimeBlock::Evening => "Evening",
            TimeBlock::Night => "Night",
        }
    }
}

impl fmt::Display for TimeBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Aggregated and classified readings for one time block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockSummary {
    pub block: TimeBlock,
    pub max_temp: Decimal,
    pub min_temp: Decimal,
    pub total_rain: Decimal,
    pub max_wind: Decimal,
    pub temperature: TemperatureBand,
    pub rainfall: RainfallBand,
    pub wind: WindBand,
    pub advice: FieldworkAdvice,
}

/// Summarize a day per time block.
///
/// Returns `None` when no reading has a parsable hour. Blocks outside the
/// day's observed hour span, and blocks without any parsed maximum
/// temperature, are left out.
pub fn summarize_blocks(day: &DayForecast) -> Option<Vec<BlockSummary>> {
    let hours: Vec<u32> = day.rows.iter().filter_map(|r| r.hour).collect();
    let start = *hours.iter().min()?;
    let end = *hours.iter().max()?;
    let span = start..=end;

    let summaries = TimeBlock::ALL
        .iter()
        .filter_map(|&block| {
            let range = block.hours();
            let in_block: Vec<&SubDailyReading> = day
                .rows
                .iter()
                .filter(|r| {
                    r.hour
                        .is_some_and(|h| range.contains(&h) && span.contains(&h))
                })
                .collect();
            summarize_block(block, &in_block)
        })
        .collect();

    Some(summaries)
}

fn summarize_block(block: TimeBlock, readings: &[&SubDailyReading]) -> Option<BlockSummary> {
    let max_temps: Vec<Decimal> = readings.iter().filter_map(|r| r.max_temp).collect();
    let max_temp = max_temps.iter().copied().max()?;
    let min_temp = readings
        .iter()
        .filter_map(|r| r.min_temp)
        .min()
        .or_else(|| max_temps.iter().copied().min())
        .unwrap_or(max_temp);
    let total_rain: Decimal = readings.iter().map(|r| r.rainfall_mm).sum();
    let max_wind = readings
        .iter()
        .map(|r| r.wind_speed)
        .max()
        .unwrap_or(Decimal::ZERO);

    Some(BlockSummary {
        block,
        max_temp,
        min_temp,
        total_rain,
        max_wind,
        temperature: TemperatureBand::classify(max_temp),
        rainfall: RainfallBand::classify(total_rain),
        wind: WindBand::classify(max_wind),
        advice: FieldworkAdvice::assess(total_rain, max_wind),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn reading(hour: u32, max: Option<Decimal>, rain: Decimal, wind: Decimal) -> SubDailyReading {
        SubDailyReading {
            hour: Some(hour),
            max_temp: max,
            min_temp: max.map(|m| m - dec!(6)),
            rainfall_mm: rain,
            wind_speed: wind,
        }
    }

    fn day(rows: Vec<SubDailyReading>) -> DayForecast {
        DayForecast {
            date: "Monday 22 December".into(),
            rows,
        }
    }

    #[test]
    fn test_blocks_cover_observed_span_only() {
        let d = day(vec![
            reading(6, Some(dec!(22)), dec!(0), dec!(2)),
            reading(9, Some(dec!(26)), dec!(0), dec!(3)),
            reading(14, Some(dec!(29)), dec!(1), dec!(4)),
        ]);
        let blocks: Vec<TimeBlock> = summarize_blocks(&d)
            .unwrap()
            .iter()
            .map(|b| b.block)
            .collect();
        assert_eq!(blocks, vec![TimeBlock::Morning, TimeBlock::Noon]);
    }

    #[test]
    fn test_block_aggregation() {
        let d = day(vec![
            reading(15, Some(dec!(31)), dec!(7), dec!(20)),
            reading(16, Some(dec!(28)), dec!(5), dec!(9)),
        ]);
        let blocks = summarize_blocks(&d).unwrap();
        assert_eq!(blocks.len(), 1);
        let b = &blocks[0];
        assert_eq!(b.block, TimeBlock::Afternoon);
        assert_eq!(b.max_temp, dec!(31));
        assert_eq!(b.min_temp, dec!(22));
        assert_eq!(b.total_rain, dec!(12));
        assert_eq!(b.max_wind, dec!(20));
        assert_eq!(b.temperature, TemperatureBand::VeryHot);
        assert_eq!(b.rainfall, RainfallBand::Heavy);
        assert_eq!(b.wind, WindBand::Strong);
        assert_eq!(b.advice, FieldworkAdvice::Difficult);
    }

    #[test]
    fn test_block_without_temperature_is_skipped() {
        let d = day(vec![
            reading(3, None, dec!(4), dec!(10)),
            reading(7, Some(dec!(18)), dec!(0), dec!(1)),
        ]);
        let blocks = summarize_blocks(&d).unwrap();
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].block, TimeBlock::Morning);
    }

    #[test]
    fn test_missing_min_temp_uses_block_max_temps() {
        let mut r1 = reading(18, Some(dec!(24)), dec!(0), dec!(0));
        let mut r2 = reading(19, Some(dec!(21)), dec!(0), dec!(0));
        r1.min_temp = None;
        r2.min_temp = None;
        let blocks = summarize_blocks(&day(vec![r1, r2])).unwrap();
        assert_eq!(blocks[0].min_temp, dec!(21));
    }

    #[test]
    fn test_span_ending_at_last_hour_of_day() {
        let d = day(vec![
            reading(22, Some(dec!(19)), dec!(0), dec!(1)),
            reading(u32::MAX, Some(dec!(40)), dec!(0), dec!(1)),
        ]);
        let blocks = summarize_blocks(&d).unwrap();
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].block, TimeBlock::Night);
        assert_eq!(blocks[0].max_temp, dec!(19));

        let d = day(vec![reading(23, Some(dec!(19)), dec!(0), dec!(1))]);
        let blocks = summarize_blocks(&d).unwrap();
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].block, TimeBlock::Night);
    }

    #[test]
    fn test_no_hours_returns_none() {
        let mut r = reading(0, Some(dec!(20)), dec!(0), dec!(0));
        r.hour = None;
        assert!(summarize_blocks(&day(vec![r])).is_none());
        assert!(summarize_blocks(&day(vec![])).is_none());
    }
}
