use super::assessment::{Assessment, Establishment, Midseason, Verdict};
use crate::reference::text::title_case;

/// Render the six advisory paragraphs: season status, duration fit,
/// establishment, mid-season, harvest, overall.
pub fn compose_paragraphs(crop_name: &str, district: &str, a: &Assessment) -> Vec<String> {
    let crop = title_case(crop_name);
    let district = title_case(district);
    let date = a.date.format("%d %B %Y");
    let planting = a.planting_month.name();

    let season = if a.in_season {
        format!(
            "As of {date}, {district} District is within the ongoing rainfall season, \
             which was expected to start around {planting}. Farmers who have not yet \
             planted may still attempt planting, but careful planning is required."
        )
    } else {
        format!(
            "As of {date}, the rainfall season in {district} District does not currently \
             support rain-fed planting. Optimal planting would have started around {planting}."
        )
    };

    let duration = if a.duration_ok {
        format!(
            "The remaining length of the rainfall season is sufficient to support the \
             full growth cycle of {crop}, provided planting is done without further delay."
        )
    } else {
        format!(
            "The remaining rainfall season is too short to reliably support the full \
             growth cycle of {crop}, making production under rain-fed conditions high risk."
        )
    };

    let establishment = match a.establishment {
        Establishment::ManagementSensitive => "Current rainfall conditions favor early crop \
             establishment but also increase the risk of waterlogging. Successful production \
             will depend on proper field selection, good drainage, or the use of raised ridges."
            .to_string(),
        Establishment::Favorable => format!(
            "Forecasted conditions during the establishment phase are generally favorable, \
             supporting rapid germination and early growth of {crop}."
        ),
    };

    let midseason = match a.midseason {
        Midseason::Conditional => "The seasonal forecast indicates a likelihood of dry spells \
             during critical growth stages. Crop performance will depend on early establishment, \
             soil fertility, and moisture conservation practices."
            .to_string(),
        Midseason::Manageable => format!(
            "Mid-season rainfall patterns are expected to adequately support vegetative \
             growth and yield development for {crop}."
        ),
    };

    let harvest = if a.harvest_within_season {
        "Harvesting is expected to occur within the active rainfall season, allowing the \
         crop to mature under forecast-supported moisture conditions."
    } else {
        "Harvesting is likely to extend beyond the end of the rainfall season, meaning that \
         supplementary irrigation would be required to sustain production."
    };

    let overall = match a.verdict {
        Verdict::Favorable => format!(
            "Overall, the seasonal forecast supports the production of {crop} in {district} \
             District if planting is done promptly and good agronomic practices are followed."
        ),
        Verdict::Cautionary => format!(
            "Overall, production of {crop} under the current seasonal conditions carries \
             elevated risk and should be carefully evaluated before proceeding."
        ),
    };

    vec![
        season,
        duration,
        establishment,
        midseason,
        harvest.to_string(),
        overall,
    ]
}
