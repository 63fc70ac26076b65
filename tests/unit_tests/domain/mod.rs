mod language_test;
mod recognition_result_test;
