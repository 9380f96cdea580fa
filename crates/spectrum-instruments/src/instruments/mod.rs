pub mod asd_screening;
