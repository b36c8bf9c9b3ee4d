//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod admin_repo;
pub mod dashboard_repo;
pub mod event_repo;
pub mod faq_repo;
pub mod gallery_repo;
pub mod inquiry_repo;
pub mod job_application_repo;
pub mod job_listing_repo;
pub mod latest_work_repo;

pub use admin_repo::AdminRepo;
pub use dashboard_repo::DashboardRepo;
pub use event_repo::EventRepo;
pub use faq_repo::FaqRepo;
pub use gallery_repo::GalleryRepo;
pub use inquiry_repo::InquiryRepo;
pub use job_application_repo::JobApplicationRepo;
pub use job_listing_repo::JobListingRepo;
pub use latest_work_repo::LatestWorkRepo;
