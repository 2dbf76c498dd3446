pub mod booking_repository;
pub mod order_repository;
pub mod racket_repository;
