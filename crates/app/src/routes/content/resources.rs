use super::{Panel, StaticTable};
use dioxus::prelude::*;

#[component]
pub fn Resources() -> Element {
    rsx! {
        Panel { title: "Resources", description: "Shared equipment and consumables.",
            StaticTable {
                headers: vec!["Name", "Location", "Status"],
                rows: vec![
                    vec!["Confocal microscope", "Room 214", "Available"],
                    vec!["PCR thermocycler", "Room 210", "In use"],
                    vec!["-80 freezer", "Cold room", "Maintenance"],
                ],
            }
        }
    }
}
