error_chain! {}
