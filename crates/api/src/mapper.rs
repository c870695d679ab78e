//! Conversion between the wire DTO and the persistence models.
//!
//! One named function per direction, enumerating every field explicitly.
//! No validation happens here: values are copied as-is and the functions
//! cannot fail. Fields present on only one side (the DTO's identifiers,
//! the entity's audit columns) are handled by the callers that own them.

use medrec_db::models::detail::{Detail, DetailData, DetailDto};

/// Extract the persistable field set from a wire DTO.
///
/// The DTO's `id` and `patientId` are routing concerns and travel
/// separately; they are not part of the write model.
pub fn to_data(dto: &DetailDto) -> DetailData {
    DetailData {
        blood_type: dto.blood_type,
        rhesus_factor: dto.rhesus_factor.clone(),
        bmi: dto.bmi,
    }
}

/// Build the wire DTO for a stored detail.
pub fn to_dto(detail: &Detail) -> DetailDto {
    DetailDto {
        id: Some(detail.id),
        blood_type: detail.blood_type,
        rhesus_factor: detail.rhesus_factor.clone(),
        bmi: detail.bmi,
        patient_id: Some(detail.patient_id),
    }
}
