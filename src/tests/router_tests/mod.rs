mod health_tests;
mod page_tests;
mod predict_tests;
