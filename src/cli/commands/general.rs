//! General commands - help text and the package list.

use crate::core::{catalog::Catalog, format::format_currency};
use std::fmt::Write as _;

/// Lists every package with price and suggested events.
#[must_use]
pub fn packages(catalog: &Catalog) -> String {
    let mut out = String::from("Paket tersedia:\n");
    for package in catalog.packages() {
        let _ = writeln!(
            out,
            "  {:<10} {:<10} {:<8} {:>14}  {}",
            package.id,
            package.name,
            package.duration,
            format_currency(package.price),
            package.recommendations.join(", ")
        );
    }
    out.trim_end().to_string()
}

/// Summary of all interactive commands.
#[must_use]
pub const fn help() -> &'static str {
    "**S2M Invoice Generator**\n\
    \n\
    Form (mode editing)\n\
    • set <field> <nilai>      - ubah isian form\n\
    \x20 field: number, date, customer, phone, address, event-date, event-type,\n\
    \x20        discount, shipping, dp, notes\n\
    • package <id>|none        - pilih atau kosongkan paket\n\
    • status paid|unpaid       - status pembayaran\n\
    • service add              - tambah layanan tambahan\n\
    • service name <i> <nama>  - ubah nama layanan ke-i\n\
    • service price <i> <harga> - ubah harga layanan ke-i\n\
    • service remove <i>       - hapus layanan ke-i\n\
    • show                     - tampilkan form dan total\n\
    • generate                 - buat invoice (wajib: customer dan paket)\n\
    \n\
    Preview\n\
    • back                     - kembali ke form\n\
    • print                    - cetak invoice\n\
    • download                 - simpan sebagai PDF\n\
    • send                     - buat pesan dan link WhatsApp\n\
    \n\
    Lainnya\n\
    • packages                 - daftar paket\n\
    • help                     - bantuan ini\n\
    • quit                     - keluar (data tidak disimpan)"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packages_lists_catalog() {
        let text = packages(&Catalog::default());
        assert!(text.starts_with("Paket tersedia:"));
        assert!(text.contains("gold"));
        assert!(text.contains("Rp 2.000.000"));
        assert!(text.contains("Wedding full day, konser, expo"));
        assert_eq!(text.lines().count(), 4);
    }

    #[test]
    fn test_help_mentions_every_command() {
        for command in [
            "set", "package", "status", "service add", "show", "generate", "back", "print",
            "download", "send", "packages", "quit",
        ] {
            assert!(help().contains(command), "{command}");
        }
    }
}
