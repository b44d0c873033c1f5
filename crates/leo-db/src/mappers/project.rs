//! Project and featured project model -> entity mapper

use leo_core::entities::{FeaturedProject, Project};

use crate::models::{FeaturedProjectModel, ProjectModel};

impl From<ProjectModel> for Project {
    fn from(model: ProjectModel) -> Self {
        Project {
            id: model.id,
            title: model.title,
            date_text: model.date_text,
            category: model.category,
            description: model.description,
            image_url: model.image_url,
            gallery_images: model.gallery_images,
            is_featured: model.is_featured,
            display_order: model.display_order,
            project_ref: model.project_id,
            completion_date: model.completion_date,
            created_at: model.created_at,
        }
    }
}

impl From<FeaturedProjectModel> for FeaturedProject {
    fn from(model: FeaturedProjectModel) -> Self {
        FeaturedProject {
            project: model.project.into(),
            featured_order: model.featured_order,
        }
    }
}
