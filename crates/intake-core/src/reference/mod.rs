//! Reference data loader: geographic hierarchy seeding and derivation.
//!
//! Place groups and places come from the static seed lists; further
//! places and the capital's sub-places are derived from the residence
//! field's value list.

use crate::build::{BuildReport, Diagnostic};
use crate::catalog::{CatalogBundle, Place, PlaceGroup, SubPlace};
use crate::error::Error;
use crate::seed::ReferenceSeed;

/// Seed and derive the geographic reference entities.
///
/// Residence labels starting with the outside-region prefix yield
/// nothing; labels of the form `"<capital> <district>"` yield sub-places
/// of the capital (fatal if the capital place is absent); every other
/// label yields an unassigned place. Labels naming an already present
/// place or sub-place add nothing. A second pass assigns places to
/// place groups from the membership list.
pub fn load(
    bundle: &mut CatalogBundle,
    seed: &ReferenceSeed,
    report: &mut BuildReport,
) -> Result<(), Error> {
    for name in &seed.place_groups {
        bundle.place_groups.push(PlaceGroup::new(name));
    }
    for name in &seed.places {
        bundle.places.push(Place::new(name));
    }

    let residence = bundle
        .field_by_label(&seed.residence.entity, &seed.residence.column)
        .cloned();
    match residence {
        Some(field) => {
            let entries: Vec<String> = bundle
                .values_for(&field.entity, field.position)
                .into_iter()
                .map(|entry| entry.label.clone())
                .collect();
            let district_prefix = format!("{} ", seed.capital);

            for label in entries {
                let label = label.trim();
                if label.starts_with(seed.outside_prefix.as_str()) {
                    continue;
                }
                if let Some(district) = label.strip_prefix(district_prefix.as_str()) {
                    // Required precondition, not a soft warning: without
                    // the capital place the geographic joins would be
                    // silently wrong.
                    if bundle.place(&seed.capital).is_none() {
                        return Err(Error::MissingReferenceEntity {
                            name: seed.capital.clone(),
                        });
                    }
                    let district = district.trim();
                    let known = bundle
                        .sub_places_of(&seed.capital)
                        .iter()
                        .any(|s| s.name == district);
                    if !known {
                        bundle
                            .sub_places
                            .push(SubPlace::new(district, &seed.capital));
                    }
                } else if bundle.place(label).is_none() {
                    bundle.places.push(Place::new(label));
                }
            }
        }
        None => report.warn(Diagnostic::UnknownFieldReference {
            entity: seed.residence.entity.clone(),
            column: seed.residence.column.clone(),
            context: "residence locator",
        }),
    }

    for membership in &seed.memberships {
        if bundle
            .place_groups
            .iter()
            .all(|g| g.name != membership.group)
        {
            report.warn(Diagnostic::UnknownMembership {
                place: membership.place.clone(),
                group: membership.group.clone(),
            });
            continue;
        }
        match bundle
            .places
            .iter_mut()
            .find(|p| p.name == membership.place)
        {
            Some(place) => place.group = Some(membership.group.clone()),
            None => report.warn(Diagnostic::UnknownMembership {
                place: membership.place.clone(),
                group: membership.group.clone(),
            }),
        }
    }

    Ok(())
}
