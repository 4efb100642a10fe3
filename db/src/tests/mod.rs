mod student_tests;
mod user_tests;
