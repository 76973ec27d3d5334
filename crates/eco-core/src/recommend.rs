//! Rule-based guidance selection from the reconciled city AQI.

use crate::models::Recommendations;

/// AQI at or above which the red-alert guidance applies.
const AQI_SEVERE: i64 = 150;
/// AQI at or above which the moderate-band guidance applies.
const AQI_MODERATE: i64 = 100;

/// Build the recommendation set for a city AQI.
///
/// The traffic-management and urban-planning lists are always
/// populated. The pollution-control and citizen-awareness lists get
/// exactly one entry each from a strict three-band ladder, and stay
/// empty when the AQI is unavailable.
pub fn recommendations_for(aqi: Option<i64>) -> Recommendations {
    let mut rec = Recommendations {
        traffic_management: vec![
            "Prioritize public transport on high-AQI days.".to_string(),
            "Implement dynamic congestion management on worst corridors.".to_string(),
        ],
        urban_planning: vec!["Plan green buffers around high-AQI hotspots.".to_string()],
        pollution_control: Vec::new(),
        citizen_awareness: Vec::new(),
    };

    let Some(aqi) = aqi else {
        return rec;
    };

    if aqi >= AQI_SEVERE {
        rec.pollution_control.push(
            "Trigger red-alert protocol: restrict heavy diesel vehicles in core areas."
                .to_string(),
        );
        rec.citizen_awareness
            .push("Advise citizens to limit outdoor activity and use masks.".to_string());
    } else if aqi >= AQI_MODERATE {
        rec.pollution_control
            .push("Increase roadside emission checks for polluting vehicles.".to_string());
        rec.citizen_awareness
            .push("Encourage work-from-home and carpooling on moderate AQI days.".to_string());
    } else {
        rec.pollution_control.push(
            "Maintain current emission control policies and expand EV infrastructure."
                .to_string(),
        );
        rec.citizen_awareness
            .push("Promote off-peak travel and public transport usage.".to_string());
    }

    rec
}
