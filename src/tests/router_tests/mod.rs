mod api_tests;
mod export_tests;
mod home_tests;
mod predict_tests;
