pub mod a001_pdf_document;
pub mod a002_chat_message;
