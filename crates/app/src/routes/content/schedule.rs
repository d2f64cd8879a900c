use super::{Panel, StaticTable};
use dioxus::prelude::*;

#[component]
pub fn Schedule() -> Element {
    rsx! {
        Panel { title: "Schedules", description: "Instrument and room bookings for this week.",
            StaticTable {
                headers: vec!["Day", "Resource", "Booked by", "Slot"],
                rows: vec![
                    vec!["Mon", "Confocal microscope", "M. Ortiz", "09:00-11:00"],
                    vec!["Tue", "Fume hood 2", "L. Chen", "13:00-15:00"],
                    vec!["Thu", "Seminar room", "Group meeting", "10:00-11:30"],
                ],
            }
        }
    }
}
