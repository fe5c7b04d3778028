pub mod break_pdf;
