//! Catalog builder: sequences the registry, the annotation parser, and
//! the reference loader into one complete bundle.
//!
//! The build is pure and deterministic: no clock, no randomness, no
//! dependence on prior catalog state. Two builds from identical seed
//! input produce byte-identical bundles.

mod report;

pub use report::{BuildReport, Diagnostic};

use crate::catalog::{
    CatalogBundle, CodedChoice, GroupDef, RangeDef, ValueListEntry, DEFAULT_BOUNDS,
};
use crate::error::Error;
use crate::reference;
use crate::registry::{register, NOT_AVAILABLE};
use crate::seed::SeedSpec;
use intake_annot::Enumeration;
use std::collections::BTreeMap;

/// Run one full catalog build from a seed.
///
/// Returns the bundle (version 0; the store assigns the real version on
/// apply) together with the collected diagnostics. Fatal conditions
/// (duplicate field keys, a missing capital place) abort with `Err` and
/// nothing is committed.
pub fn build(seed: &SeedSpec) -> Result<(CatalogBundle, BuildReport), Error> {
    let mut report = BuildReport::new();
    let mut bundle = CatalogBundle::new(0);

    for name in &seed.groups {
        if bundle.group(name).is_some() {
            return Err(Error::InvalidSeed(format!("group '{name}' declared twice")));
        }
        bundle.groups.push(GroupDef::new(name));
    }

    let mut fields = register(&seed.entities)?;

    // Exceptions are data: reclassify kinds before parsing so the
    // override is authoritative when an annotation disagrees.
    for ov in &seed.kind_overrides {
        if let Some(field) = fields.iter_mut().find(|f| ov.matches(f)) {
            field.kind = ov.kind;
        } else {
            report.warn(Diagnostic::UnknownFieldReference {
                entity: ov.entity.clone(),
                column: ov.column.clone(),
                context: "kind override",
            });
        }
    }

    for field in &mut fields {
        let mut tag: Option<String> = None;

        if field.description != NOT_AVAILABLE {
            match intake_annot::parse(&field.description) {
                Ok(annotation) => {
                    tag = annotation.group;
                    match annotation.values {
                        Enumeration::Coded(pairs) => {
                            if field.kind.is_coded() {
                                for (index, pair) in pairs.into_iter().enumerate() {
                                    bundle.choices.push(CodedChoice::new(
                                        &field.entity,
                                        field.position,
                                        pair.code,
                                        (index + 1) as u32,
                                        pair.description,
                                    ));
                                }
                            } else {
                                report.warn(Diagnostic::KindConflict {
                                    entity: field.entity.clone(),
                                    label: field.label.clone(),
                                    kind: field.kind,
                                });
                            }
                        }
                        Enumeration::Plain(values) => {
                            for (index, value) in values.into_iter().enumerate() {
                                bundle.values.push(ValueListEntry::new(
                                    &field.entity,
                                    field.position,
                                    (index + 1) as u32,
                                    value,
                                ));
                            }
                        }
                        Enumeration::Empty => {}
                    }
                }
                Err(e) => {
                    report.warn(Diagnostic::MalformedAnnotation {
                        entity: field.entity.clone(),
                        label: field.label.clone(),
                        reason: e.to_string(),
                    });
                    // The group tag sits outside the enumeration and may
                    // still be salvageable.
                    tag = intake_annot::group_of(&field.description).map(str::to_owned);
                }
            }
        }

        if let Some(ov) = seed.group_overrides.iter().find(|ov| ov.matches(field)) {
            tag = Some(ov.group.clone());
        }

        match tag {
            Some(tag) if bundle.group(&tag).is_some() => field.group = Some(tag),
            other => report.warn(Diagnostic::UnresolvedGroup {
                entity: field.entity.clone(),
                label: field.label.clone(),
                tag: other,
            }),
        }
    }

    // Intra-group display positions: a sequential counter per group over
    // fields in (entity, position) order, so fields of different entities
    // sharing a group interleave.
    let mut counters: BTreeMap<String, u32> = BTreeMap::new();
    for field in &mut fields {
        if let Some(group) = &field.group {
            let counter = counters.entry(group.clone()).or_insert(0);
            *counter += 1;
            field.group_position = *counter;
        }
    }

    for ov in &seed.range_overrides {
        let Some(field) = fields.iter().find(|f| ov.matches(f)) else {
            report.warn(Diagnostic::UnknownFieldReference {
                entity: ov.entity.clone(),
                column: ov.column.clone(),
                context: "range override",
            });
            continue;
        };
        if bundle.range_for(&field.entity, field.position).is_some() {
            report.warn(Diagnostic::DuplicateRange {
                entity: field.entity.clone(),
                label: field.label.clone(),
            });
            continue;
        }
        bundle.ranges.push(RangeDef::new(
            &field.entity,
            field.position,
            ov.min.unwrap_or(DEFAULT_BOUNDS.0),
            ov.max.unwrap_or(DEFAULT_BOUNDS.1),
        ));
    }

    bundle.fields = fields;

    reference::load(&mut bundle, &seed.reference, &mut report)?;

    tracing::info!(
        fields = bundle.fields.len(),
        choices = bundle.choices.len(),
        values = bundle.values.len(),
        ranges = bundle.ranges.len(),
        places = bundle.places.len(),
        sub_places = bundle.sub_places.len(),
        diagnostics = report.diagnostics().len(),
        "catalog build complete"
    );

    Ok((bundle, report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FieldKind;
    use crate::registry::{ColumnSpec, EntitySpec, GroupOverride, KindOverride, RangeOverride};
    use crate::seed::{FieldLocator, Membership, ReferenceSeed};

    fn sample_seed() -> SeedSpec {
        SeedSpec {
            groups: vec![
                "Interview".into(),
                "Applicant".into(),
                "Request".into(),
            ],
            entities: vec![
                EntitySpec::new(
                    "INTERVIEW",
                    vec![
                        ColumnSpec::annotated("Date", "Interview date, Group Interview"),
                        ColumnSpec::annotated(
                            "Channel",
                            "Channel (1 : In person;2 : Phone), Group Interview",
                        ),
                        ColumnSpec::annotated("Dependents", "Number of dependents, Group Applicant"),
                        ColumnSpec::annotated(
                            "Residence",
                            "Residence (Vannes Downtown;Vannes Kercado;Auray;Sarzeau;Outside Morbihan), Group Applicant",
                        ),
                        ColumnSpec::bare("Notes"),
                        ColumnSpec::annotated("Broken", "Broken (1 : A;2 : B, Group Interview"),
                        ColumnSpec::annotated("Mixed", "Mixed (1 : A;Beta), Group Interview"),
                        ColumnSpec::annotated(
                            "Situation",
                            "Situation (1 : Single;2 : Married), Group Applicant",
                        ),
                    ],
                ),
                EntitySpec::new(
                    "REQUEST",
                    vec![ColumnSpec::annotated(
                        "Nature",
                        "Nature (10 : Housing;11 : Family law), Group Request",
                    )],
                ),
                EntitySpec::new(
                    "RESOLUTION",
                    vec![ColumnSpec::annotated(
                        "Outcome",
                        "Outcome (1 : Referred;2 : Resolved), Group Request",
                    )],
                ),
            ],
            kind_overrides: vec![KindOverride::new(
                "INTERVIEW",
                "Dependents",
                FieldKind::FreeNumeric,
            ), KindOverride::new("INTERVIEW", "Residence", FieldKind::Text)],
            group_overrides: vec![GroupOverride::new("INTERVIEW", "Notes", "Interview")],
            range_overrides: vec![RangeOverride::new("INTERVIEW", "Dependents", 0, 20)],
            reference: ReferenceSeed {
                place_groups: vec!["Gulf Area".into()],
                places: vec!["Vannes".into()],
                memberships: vec![Membership {
                    place: "Vannes".into(),
                    group: "Gulf Area".into(),
                }],
                capital: "Vannes".into(),
                residence: FieldLocator {
                    entity: "INTERVIEW".into(),
                    column: "Residence".into(),
                },
                outside_prefix: "Outside".into(),
            },
        }
    }

    #[test]
    fn test_coded_field_fully_built() {
        let (bundle, _) = build(&sample_seed()).unwrap();

        let field = bundle.field_by_label("INTERVIEW", "Situation").unwrap();
        assert_eq!(field.position, 8);
        assert_eq!(field.group.as_deref(), Some("Applicant"));

        let choices = bundle.choices_for("INTERVIEW", field.position);
        assert_eq!(choices.len(), 2);
        assert_eq!((choices[0].code.as_str(), choices[0].label.as_str()), ("1", "Single"));
        assert_eq!((choices[1].code.as_str(), choices[1].label.as_str()), ("2", "Married"));
        assert_eq!(choices[0].display_order, 1);
        assert_eq!(choices[1].display_order, 2);
    }

    #[test]
    fn test_plain_list_becomes_value_entries() {
        let (bundle, _) = build(&sample_seed()).unwrap();

        let field = bundle.field_by_label("INTERVIEW", "Residence").unwrap();
        let values = bundle.values_for("INTERVIEW", field.position);
        assert_eq!(values.len(), 5);
        assert_eq!(values[0].label, "Vannes Downtown");
        assert_eq!(values[0].seq, 1);
        assert_eq!(values[4].label, "Outside Morbihan");
        assert_eq!(values[4].seq, 5);
    }

    #[test]
    fn test_kind_override_applied() {
        let (bundle, _) = build(&sample_seed()).unwrap();

        let dependents = bundle.field_by_label("INTERVIEW", "Dependents").unwrap();
        assert_eq!(dependents.kind, FieldKind::FreeNumeric);
        let residence = bundle.field_by_label("INTERVIEW", "Residence").unwrap();
        assert_eq!(residence.kind, FieldKind::Text);
    }

    #[test]
    fn test_range_override_applied() {
        let (bundle, _) = build(&sample_seed()).unwrap();

        let field = bundle.field_by_label("INTERVIEW", "Dependents").unwrap();
        let range = bundle.range_for("INTERVIEW", field.position).unwrap();
        assert_eq!((range.min, range.max), (0, 20));
    }

    #[test]
    fn test_range_defaults_when_bounds_absent() {
        let mut seed = sample_seed();
        seed.range_overrides = vec![RangeOverride::default_bounds("INTERVIEW", "Dependents")];

        let (bundle, _) = build(&seed).unwrap();
        let field = bundle.field_by_label("INTERVIEW", "Dependents").unwrap();
        let range = bundle.range_for("INTERVIEW", field.position).unwrap();
        assert_eq!((range.min, range.max), (0, 128));
    }

    #[test]
    fn test_group_positions_interleave_across_entities() {
        let (bundle, _) = build(&sample_seed()).unwrap();

        // "Request" collects fields from both REQUEST and RESOLUTION.
        let request_fields = bundle.fields_in_group("Request");
        assert_eq!(request_fields.len(), 2);
        assert_eq!(request_fields[0].entity, "REQUEST");
        assert_eq!(request_fields[0].group_position, 1);
        assert_eq!(request_fields[1].entity, "RESOLUTION");
        assert_eq!(request_fields[1].group_position, 2);
    }

    #[test]
    fn test_column_constraints_flow_through_build() {
        let mut seed = sample_seed();
        seed.entities[0].columns[0].required = true;
        seed.entities[0].columns[1].default = Some("1".into());

        let (bundle, _) = build(&seed).unwrap();
        let date = bundle.field_by_label("INTERVIEW", "Date").unwrap();
        assert!(date.required);
        let channel = bundle.field_by_label("INTERVIEW", "Channel").unwrap();
        assert!(!channel.required);
        assert_eq!(channel.default_value.as_deref(), Some("1"));
    }

    #[test]
    fn test_group_match_is_accent_sensitive() {
        let mut seed = sample_seed();
        seed.groups.push("Énergie".into());
        seed.entities[0]
            .columns
            .push(ColumnSpec::annotated("Heating", "Heating aid, Group Energie"));

        let (bundle, report) = build(&seed).unwrap();
        let heating = bundle.field_by_label("INTERVIEW", "Heating").unwrap();
        assert!(heating.group.is_none());
        assert!(report.diagnostics().iter().any(|d| matches!(
            d,
            Diagnostic::UnresolvedGroup { tag: Some(tag), .. } if tag == "Energie"
        )));
    }

    #[test]
    fn test_group_override_wins() {
        let (bundle, _) = build(&sample_seed()).unwrap();

        let notes = bundle.field_by_label("INTERVIEW", "Notes").unwrap();
        assert_eq!(notes.group.as_deref(), Some("Interview"));
    }

    #[test]
    fn test_malformed_annotation_recovers() {
        let (bundle, report) = build(&sample_seed()).unwrap();

        // The broken field lost its enumeration but kept its group.
        let broken = bundle.field_by_label("INTERVIEW", "Broken").unwrap();
        assert!(bundle.choices_for("INTERVIEW", broken.position).is_empty());
        assert_eq!(broken.group.as_deref(), Some("Interview"));

        let mixed = bundle.field_by_label("INTERVIEW", "Mixed").unwrap();
        assert!(bundle.choices_for("INTERVIEW", mixed.position).is_empty());
        assert!(bundle.values_for("INTERVIEW", mixed.position).is_empty());

        let malformed = report
            .diagnostics()
            .iter()
            .filter(|d| matches!(d, Diagnostic::MalformedAnnotation { .. }))
            .count();
        assert_eq!(malformed, 2);

        // Other fields built normally.
        assert!(!bundle.choices_for("INTERVIEW", 8).is_empty());
    }

    #[test]
    fn test_kind_conflict_skips_enumeration() {
        let mut seed = sample_seed();
        seed.kind_overrides.push(KindOverride::new(
            "INTERVIEW",
            "Situation",
            FieldKind::FreeNumeric,
        ));

        let (bundle, report) = build(&seed).unwrap();
        let field = bundle.field_by_label("INTERVIEW", "Situation").unwrap();
        assert_eq!(field.kind, FieldKind::FreeNumeric);
        assert!(bundle.choices_for("INTERVIEW", field.position).is_empty());
        assert!(report
            .diagnostics()
            .iter()
            .any(|d| matches!(d, Diagnostic::KindConflict { .. })));
    }

    #[test]
    fn test_unannotated_field_gets_sentinel_and_warning() {
        let (bundle, report) = build(&sample_seed()).unwrap();

        let notes = bundle.field_by_label("INTERVIEW", "Notes").unwrap();
        assert_eq!(notes.description, NOT_AVAILABLE);
        // The Broken/Mixed/no-tag warnings coexist; just confirm nothing
        // was silently dropped.
        assert!(!report.is_clean());
    }

    #[test]
    fn test_duplicate_label_aborts_build() {
        let mut seed = sample_seed();
        seed.entities[0]
            .columns
            .push(ColumnSpec::bare("Date"));

        let err = build(&seed).unwrap_err();
        assert!(matches!(err, Error::DuplicateKey { .. }));
    }

    #[test]
    fn test_idempotent_rebuild_is_byte_identical() {
        let seed = sample_seed();
        let (first, _) = build(&seed).unwrap();
        let (second, _) = build(&seed).unwrap();

        assert_eq!(first.to_bytes().unwrap(), second.to_bytes().unwrap());
    }

    #[test]
    fn test_coded_enumeration_round_trip() {
        let seed = sample_seed();
        let (bundle, _) = build(&seed).unwrap();

        // Re-joining the choices in display order reconstructs the source
        // enumeration text modulo whitespace.
        let field = bundle.field_by_label("REQUEST", "Nature").unwrap();
        let text = bundle
            .choices_for("REQUEST", field.position)
            .iter()
            .map(|c| format!("{} : {}", c.code, c.label))
            .collect::<Vec<_>>()
            .join(";");
        assert_eq!(text, "10 : Housing;11 : Family law");
    }

    #[test]
    fn test_duplicate_group_in_seed_is_fatal() {
        let mut seed = sample_seed();
        seed.groups.push("Interview".into());

        let err = build(&seed).unwrap_err();
        assert!(matches!(err, Error::InvalidSeed(_)));
    }
}
