pub mod admins;
pub mod auth;
pub mod dashboard;
pub mod events;
pub mod faqs;
pub mod gallery;
pub mod inquiries;
pub mod job_applications;
pub mod job_listings;
pub mod latest_works;
