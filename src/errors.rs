error_chain! {
    foreign_links {
        Io(::std::io::Error);
    }

    errors {
        InvalidSymbol(symbol: u8) {
            description("invalid IUPAC symbol")
            display("invalid IUPAC symbol {:?}", *symbol as char)
        }
    }
}
