mod google;

pub use google::GoogleProvider;
