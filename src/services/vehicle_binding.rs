use std::collections::BTreeMap;

use tracing::debug;

use crate::models::course::{CourseCatalog, CourseLabel};
use crate::models::vehicle::VehicleTable;
use crate::models::weekday::Weekday;
use crate::services::course_name;

/// Resolved vehicle for one course name.
#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    pub vehicle_id: Option<String>,
    /// Empty when the course has no vehicle or the id is unknown.
    pub plate: String,
}

/// Course name to vehicle map built from the whole catalog. One table per
/// generation run; course names are global, so a name appearing on several
/// weekdays ends up with the binding of its last occurrence in Monday to
/// Sunday order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BindingTable {
    bindings: BTreeMap<String, Binding>,
}

impl BindingTable {
    pub fn build(catalog: &CourseCatalog, vehicles: &VehicleTable) -> Self {
        let mut bindings: BTreeMap<String, Binding> = BTreeMap::new();

        for day in Weekday::ALL {
            let Some(day_courses) = catalog.get(&day) else {
                continue;
            };
            for course in day_courses {
                let name = course_name::normalize(&course.name);
                if !CourseLabel::from_name(&name).is_bindable() {
                    continue;
                }
                let plate = course
                    .vehicle_id
                    .as_deref()
                    .and_then(|id| vehicles.get(id))
                    .map(|vehicle| vehicle.plate.clone())
                    .unwrap_or_default();

                if let Some(previous) = bindings.get(&name) {
                    if previous.plate != plate {
                        debug!(
                            target: "app::binding",
                            course = %name,
                            old_plate = %previous.plate,
                            new_plate = %plate,
                            "course rebound to a different vehicle"
                        );
                    }
                }
                bindings.insert(
                    name,
                    Binding {
                        vehicle_id: course.vehicle_id.clone(),
                        plate,
                    },
                );
            }
        }

        Self { bindings }
    }

    pub fn get(&self, normalized_name: &str) -> Option<&Binding> {
        self.bindings.get(normalized_name)
    }

    /// Plate for an already-normalized course name, empty when unbound.
    pub fn plate_for(&self, normalized_name: &str) -> &str {
        self.bindings
            .get(normalized_name)
            .map(|binding| binding.plate.as_str())
            .unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
