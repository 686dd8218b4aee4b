pub mod page_number;
