pub mod landing;
pub mod nav;
