mod document_model_tests;
