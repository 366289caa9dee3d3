fn main() {
    multiversx_sc_meta_lib::cli_main::<example_acceptor::AbiProvider>();
}
