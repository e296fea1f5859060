use crate::{PaddingKind, PaddingLayout};
use diagnostics::{Diagnostics, WarningDiagnostic};
use record::RecordInfo;

/// Reports the padding of a finished layout, according to the enabled
/// diagnostic flags.
pub fn check_padding(layout: &PaddingLayout, info: &RecordInfo, diagnostics: &mut Diagnostics) {
    let friendly_record_name = info.friendly_name();

    for location in layout.padding_locations() {
        match location.kind {
            PaddingKind::BeforeField(field_i) => {
                if diagnostics.flags().warn_padded_field {
                    diagnostics.push(WarningDiagnostic::new(
                        format!(
                            "Padded field of '{}' at index {}, with {} before offset {}",
                            friendly_record_name,
                            field_i,
                            location.length,
                            location.end().bytes(),
                        ),
                        friendly_record_name,
                    ));
                }
            }
            PaddingKind::Trailing => {
                if diagnostics.flags().warn_padded_record {
                    diagnostics.push(WarningDiagnostic::new(
                        format!(
                            "Padded type '{}', with {} to alignment boundary",
                            friendly_record_name, location.length,
                        ),
                        friendly_record_name,
                    ));
                }
            }
        }
    }
}
