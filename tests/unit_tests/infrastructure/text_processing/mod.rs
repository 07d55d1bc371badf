mod extractor_factory_test;
mod text_sanitizer_test;
