pub mod printing;
