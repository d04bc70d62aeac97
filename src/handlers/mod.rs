pub mod grocery;
