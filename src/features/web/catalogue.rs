//! Product features shown under `/fitur/{slug}`. Fixed at compile time.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Feature {
    pub slug: &'static str,
    pub name: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub highlights: &'static [&'static str],
}

pub const FEATURES: &[Feature] = &[
    Feature {
        slug: "penjadwalan-otomatis",
        name: "Penjadwalan Otomatis",
        tagline: "Bagikan satu tautan, biarkan tamu memilih waktu sendiri.",
        description: "Temujanji membaca ketersediaan Anda dan hanya menawarkan slot yang benar-benar kosong. \
                      Tidak ada lagi bolak-balik pesan untuk mencari waktu rapat.",
        highlights: &[
            "Slot mengikuti jam kerja dan zona waktu Anda",
            "Jeda otomatis di antara rapat",
            "Batas jumlah rapat per hari",
        ],
    },
    Feature {
        slug: "integrasi-kalender",
        name: "Integrasi Kalender",
        tagline: "Terhubung dengan Google Calendar dan Outlook.",
        description: "Setiap janji temu langsung tercatat di kalender Anda dan kalender tamu, \
                      lengkap dengan tautan rapat online.",
        highlights: &[
            "Sinkronisasi dua arah",
            "Cek bentrok dari beberapa kalender sekaligus",
            "Tautan Google Meet atau Zoom dibuat otomatis",
        ],
    },
    Feature {
        slug: "pengingat-whatsapp",
        name: "Pengingat WhatsApp",
        tagline: "Kurangi tamu yang lupa datang.",
        description: "Kirim pengingat lewat WhatsApp dan email sebelum rapat dimulai, \
                      dengan tautan untuk menjadwalkan ulang bila berhalangan.",
        highlights: &[
            "Atur waktu pengingat sesuai kebutuhan",
            "Template pesan dalam Bahasa Indonesia",
            "Tamu bisa menjadwalkan ulang sendiri",
        ],
    },
    Feature {
        slug: "halaman-booking",
        name: "Halaman Booking",
        tagline: "Halaman pemesanan dengan merek Anda sendiri.",
        description: "Tampilkan logo, warna dan jenis layanan Anda dalam satu halaman \
                      yang siap dibagikan ke pelanggan.",
        highlights: &[
            "Beberapa jenis janji temu dalam satu halaman",
            "Pertanyaan tambahan sebelum booking",
            "Bisa disematkan di situs Anda",
        ],
    },
    Feature {
        slug: "manajemen-tim",
        name: "Manajemen Tim",
        tagline: "Bagi jadwal secara adil ke seluruh tim.",
        description: "Atur penjadwalan bergilir atau kolektif sehingga setiap anggota tim \
                      mendapat porsi rapat yang seimbang.",
        highlights: &[
            "Penjadwalan round-robin",
            "Rapat kolektif dengan beberapa host",
            "Laporan aktivitas per anggota",
        ],
    },
    Feature {
        slug: "pembayaran-online",
        name: "Pembayaran Online",
        tagline: "Terima pembayaran saat tamu memesan.",
        description: "Cocok untuk konsultasi berbayar: tamu membayar lebih dulu, \
                      jadwal terkunci setelah pembayaran berhasil.",
        highlights: &[
            "Transfer bank, e-wallet dan QRIS",
            "Faktur otomatis",
            "Pengembalian dana untuk pembatalan",
        ],
    },
];

pub fn find_feature(slug: &str) -> Option<&'static Feature> {
    FEATURES.iter().find(|f| f.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::validation::SLUG_REGEX;
    use std::collections::HashSet;

    #[test]
    fn test_slugs_are_unique_and_well_formed() {
        let mut seen = HashSet::new();
        for feature in FEATURES {
            assert!(SLUG_REGEX.is_match(feature.slug), "{}", feature.slug);
            assert!(seen.insert(feature.slug), "duplicate {}", feature.slug);
            assert!(!feature.highlights.is_empty());
        }
    }

    #[test]
    fn test_find_feature() {
        assert_eq!(
            find_feature("integrasi-kalender").map(|f| f.name),
            Some("Integrasi Kalender")
        );
        assert!(find_feature("tidak-ada").is_none());
    }
}
