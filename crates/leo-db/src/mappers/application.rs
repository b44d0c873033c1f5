//! Membership application model -> entity mapper

use leo_core::entities::MembershipApplication;
use leo_core::value_objects::ApplicationStatus;
use tracing::warn;

use crate::models::MembershipApplicationModel;

impl From<MembershipApplicationModel> for MembershipApplication {
    fn from(model: MembershipApplicationModel) -> Self {
        let status = model.status.parse::<ApplicationStatus>().unwrap_or_else(|e| {
            warn!(id = %model.id, error = %e, "Unexpected application status, treating as new");
            ApplicationStatus::New
        });

        MembershipApplication {
            id: model.id,
            full_name: model.full_name,
            email: model.email,
            phone: model.phone,
            age: model.age,
            organization: model.organization,
            motivation: model.motivation,
            consent: model.consent,
            status,
            admin_notes: model.admin_notes,
            reviewed_at: model.reviewed_at,
            reviewer_email: model.reviewer_email,
            created_at: model.created_at,
        }
    }
}
