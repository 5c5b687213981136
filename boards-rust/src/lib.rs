pub mod cardio;
