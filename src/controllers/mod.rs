pub mod booking_controller;
pub mod order_controller;
pub mod racket_controller;
