mod predict_tests;
mod search_tests;
