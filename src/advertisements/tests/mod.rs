mod generator_tests;
mod validators_tests;
