//! Landing page aggregate
//!
//! The landing page renders even when some of its sections fail to load: a
//! failed section is logged and shown empty.

use std::future::Future;

use leo_core::entities::{FeatureCard, Faq, PortfolioImage, ServiceOffering, Testimonial};
use tracing::{instrument, warn};

use crate::dto::LandingPageResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::featured::FeaturedService;
use super::section::SectionService;
use super::settings::SettingsService;

/// Landing page service
pub struct HomeService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> HomeService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Everything the landing page shows
    #[instrument(skip(self))]
    pub async fn landing_page(&self) -> LandingPageResponse {
        let featured = FeaturedService::new(self.ctx);

        LandingPageResponse {
            featured_projects: or_empty("featured projects", featured.list_projects()).await,
            featured_achievements: or_empty("featured achievements", featured.list_achievements())
                .await,
            testimonials: or_empty(
                "testimonials",
                SectionService::<Testimonial>::new(self.ctx).list_public(),
            )
            .await,
            faqs: or_empty("faqs", SectionService::<Faq>::new(self.ctx).list_public()).await,
            services: or_empty(
                "services",
                SectionService::<ServiceOffering>::new(self.ctx).list_public(),
            )
            .await,
            feature_cards: or_empty(
                "feature cards",
                SectionService::<FeatureCard>::new(self.ctx).list_public(),
            )
            .await,
            portfolio_images: or_empty(
                "portfolio images",
                SectionService::<PortfolioImage>::new(self.ctx).list_public(),
            )
            .await,
            settings: or_empty("settings", SettingsService::new(self.ctx).list()).await,
        }
    }
}

async fn or_empty<T: Default>(section: &str, load: impl Future<Output = ServiceResult<T>>) -> T {
    match load.await {
        Ok(value) => value,
        Err(e) => {
            warn!(section, error = %e, "Landing page section unavailable");
            T::default()
        }
    }
}
