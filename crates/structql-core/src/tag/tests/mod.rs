mod tag_parser_tests;
