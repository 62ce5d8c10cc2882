mod document_index_tests;
mod document_loader_tests;
mod pointer_tests;
