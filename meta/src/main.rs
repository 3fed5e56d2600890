fn main() {
    multiversx_sc_meta_lib::cli_main::<milestone_escrow::AbiProvider>();
}
