//! Default content catalog
//!
//! Built-in fallback values for every collection and singleton. Served
//! verbatim whenever the store is empty, unreachable or denies access, so the
//! shape must match what the store holds.

use super::entities::{
    AboutPage, CtaSection, FaqItem, HeroSection, PageSection, PortfolioProject, ProcessStep,
    ServicePackage, ServicesPage, SignatureIcon, SignatureStyle, SiteContent, SiteSettings,
    Testimonial,
};

pub const BRAND_NAME: &str = "Aster & Co.";
pub const WHATSAPP_NUMBER: &str = "6281234567890";
pub const ADMIN_EMAIL: &str = "hello@asterandco.com";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn settings() -> SiteSettings {
    SiteSettings {
        brand_name: BRAND_NAME.to_string(),
        whatsapp_number: WHATSAPP_NUMBER.to_string(),
        admin_email: ADMIN_EMAIL.to_string(),
        address: "Jakarta Selatan, Indonesia".to_string(),
        budget_ranges: strings(&[
            "< IDR 100 Juta",
            "IDR 100 Juta - 250 Juta",
            "IDR 250 Juta - 500 Juta",
            "IDR 500 Juta - 1 Milyar",
            "> IDR 1 Milyar",
        ]),
    }
}

pub fn site_content() -> SiteContent {
    SiteContent {
        hero: HeroSection {
            headline: "Creating Timeless Moments & \nUnforgettable Memories".to_string(),
            subheadline: "Premium Wedding Organizer & Planner in Indonesia".to_string(),
            cta_text: "Book Free Consultation".to_string(),
            background_image: "https://images.unsplash.com/photo-1519741497674-611481863552?ixlib=rb-1.2.1&auto=format&fit=crop&w=1920&q=80".to_string(),
        },
        signature_styles: vec![
            SignatureStyle {
                id: "s1".to_string(),
                icon_name: SignatureIcon::Heart,
                title: "Personalized Concept".to_string(),
                description: "Kami mendengarkan cerita Anda untuk menciptakan konsep pernikahan yang benar-benar personal dan unik.".to_string(),
            },
            SignatureStyle {
                id: "s2".to_string(),
                icon_name: SignatureIcon::Clock,
                title: "Seamless Execution".to_string(),
                description: "Perencanaan teliti dan koordinasi sempurna agar Anda bisa menikmati momen tanpa rasa khawatir.".to_string(),
            },
            SignatureStyle {
                id: "s3".to_string(),
                icon_name: SignatureIcon::Star,
                title: "Premium Vendors".to_string(),
                description: "Akses eksklusif ke vendor-vendor pernikahan terbaik di industri yang telah terkurasi.".to_string(),
            },
        ],
        cta_section: CtaSection {
            title: "Let's Plan Your Dream Wedding".to_string(),
            description: "Jadwalkan konsultasi gratis dengan tim expert kami untuk mendiskusikan visi pernikahan Anda.".to_string(),
            button_text: "Start Planning Today".to_string(),
        },
        process: Some(vec![
            ProcessStep {
                number: "01".to_string(),
                title: "Free Consultation".to_string(),
                description: "Ceritakan visi, jumlah tamu dan anggaran Anda kepada tim kami.".to_string(),
            },
            ProcessStep {
                number: "02".to_string(),
                title: "Concept & Proposal".to_string(),
                description: "Kami menyusun konsep, rekomendasi vendor dan estimasi biaya yang transparan.".to_string(),
            },
            ProcessStep {
                number: "03".to_string(),
                title: "Planning & Vendor Curation".to_string(),
                description: "Negosiasi vendor, technical meeting dan rundown disiapkan bersama Anda.".to_string(),
            },
            ProcessStep {
                number: "04".to_string(),
                title: "The Big Day".to_string(),
                description: "Tim koordinasi kami memastikan setiap detail berjalan sesuai rencana.".to_string(),
            },
        ]),
        faq: Some(vec![
            FaqItem {
                question: "Berapa lama sebelum hari-H sebaiknya kami booking?".to_string(),
                answer: "Idealnya 9-12 bulan untuk Full Planning, dan minimal 1 bulan untuk On-the-Day Coordination.".to_string(),
            },
            FaqItem {
                question: "Apakah melayani pernikahan di luar Jakarta?".to_string(),
                answer: "Ya, kami melayani destination wedding di seluruh Indonesia, termasuk Bali, Yogyakarta dan Bandung.".to_string(),
            },
            FaqItem {
                question: "Apakah harga paket sudah termasuk vendor?".to_string(),
                answer: "Harga paket adalah jasa perencanaan dan koordinasi. Biaya vendor dibayarkan terpisah sesuai pilihan Anda.".to_string(),
            },
        ]),
        services_page: Some(services_page()),
        about_page: Some(about_page()),
    }
}

pub fn services_page() -> ServicesPage {
    ServicesPage {
        header: PageSection {
            title: "Our Services".to_string(),
            description: "Kami menawarkan rangkaian layanan yang disesuaikan dengan kebutuhan Anda, mulai dari perencanaan awal hingga koordinasi hari-H.".to_string(),
            image: None,
            subtitle: None,
        },
        section1: PageSection {
            title: "Full Wedding Planning".to_string(),
            description: "Layanan komprehensif dimana kami mendampingi Anda dari nol. Mulai dari pencarian venue, seleksi vendor, konsep desain, manajemen anggaran, hingga eksekusi hari H.".to_string(),
            image: Some("https://images.unsplash.com/photo-1511795409834-ef04bbd61622?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80".to_string()),
            subtitle: Some("Best for busy couples".to_string()),
        },
        section2: PageSection {
            title: "Day-of Coordination".to_string(),
            description: "Anda sudah merencanakan semuanya? Kami mengambil alih satu bulan sebelum acara untuk memastikan eksekusi hari-H berjalan mulus.".to_string(),
            image: Some("https://images.unsplash.com/photo-1464366400600-7168b8af9bc3?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80".to_string()),
            subtitle: Some("Best for DIY couples".to_string()),
        },
    }
}

pub fn about_page() -> AboutPage {
    AboutPage {
        header: PageSection {
            title: "About Aster & Co.".to_string(),
            description: "Wedding planner yang percaya setiap cerita cinta layak dirayakan dengan indah.".to_string(),
            image: Some("https://images.unsplash.com/photo-1465495976277-4387d4b0b4c6?ixlib=rb-1.2.1&auto=format&fit=crop&w=1920&q=80".to_string()),
            subtitle: Some("Our Story".to_string()),
        },
        story: PageSection {
            title: "Crafting Celebrations Since 2015".to_string(),
            description: "Berawal dari tim kecil di Jakarta Selatan, kami telah mendampingi ratusan pasangan merayakan hari paling berharga mereka dengan detail yang dipikirkan matang.".to_string(),
            image: Some("https://images.unsplash.com/photo-1520854221256-17451cc331bf?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80".to_string()),
            subtitle: None,
        },
    }
}

pub fn packages() -> Vec<ServicePackage> {
    vec![
        ServicePackage {
            id: "1".to_string(),
            name: "Full Planning Service".to_string(),
            price_from: "IDR 75.000.000".to_string(),
            features: strings(&[
                "Konsep & Desain Acara Lengkap",
                "Pengelolaan Budget & Pembayaran",
                "Kurasi & Negosiasi Vendor",
                "Unlimited Konsultasi",
                "Hari-H Koordinasi (10 Tim)",
                "RSVP Management",
            ]),
            is_featured: true,
            order: 1,
        },
        ServicePackage {
            id: "2".to_string(),
            name: "Partial Planning".to_string(),
            price_from: "IDR 45.000.000".to_string(),
            features: strings(&[
                "Melanjutkan Perencanaan Klien",
                "Rekomendasi Vendor Tersisa",
                "Finalisasi Rundown",
                "Technical Meeting Vendor",
                "Hari-H Koordinasi (8 Tim)",
            ]),
            is_featured: false,
            order: 2,
        },
        ServicePackage {
            id: "3".to_string(),
            name: "On-the-Day Coordination".to_string(),
            price_from: "IDR 25.000.000".to_string(),
            features: strings(&[
                "Handover 1 Bulan Sebelum Acara",
                "Pembuatan Rundown Detail",
                "Koordinasi Vendor Saat Hari-H",
                "Hari-H Koordinasi (6 Tim)",
                "Penyelesaian Masalah Lapangan",
            ]),
            is_featured: false,
            order: 3,
        },
    ]
}

pub fn projects() -> Vec<PortfolioProject> {
    vec![
        PortfolioProject {
            id: "p1".to_string(),
            title: "Clara & David".to_string(),
            slug: "clara-david".to_string(),
            cover_image: "https://picsum.photos/800/600?random=1".to_string(),
            location: "Amanjiwo, Magelang".to_string(),
            date: "12 October 2023".to_string(),
            theme_tags: strings(&["Outdoor", "Intimate", "Traditional-Modern"]),
            description: "Sebuah perayaan cinta yang intim dengan latar belakang Candi Borobudur, menggabungkan adat Jawa dengan sentuhan modern minimalis.".to_string(),
            vendors: strings(&["Axioo Photography", "Syalendra Decoration", "Hian Tjen (Dress)"]),
            is_featured: None,
        },
        PortfolioProject {
            id: "p2".to_string(),
            title: "Eleanor & James".to_string(),
            slug: "eleanor-james".to_string(),
            cover_image: "https://picsum.photos/800/600?random=2".to_string(),
            location: "The Langham, Jakarta".to_string(),
            date: "05 September 2023".to_string(),
            theme_tags: strings(&["Ballroom", "Elegant", "International"]),
            description: "Kemewahan klasik di jantung Jakarta. Didominasi warna putih dan emas, menciptakan suasana royal wedding yang tak terlupakan.".to_string(),
            vendors: strings(&["David Salim Photography", "Stupa Caspea", "Yefta Gunawan"]),
            is_featured: None,
        },
        PortfolioProject {
            id: "p3".to_string(),
            title: "Sinta & Rama".to_string(),
            slug: "sinta-rama".to_string(),
            cover_image: "https://picsum.photos/800/600?random=3".to_string(),
            location: "Pine Hill, Bandung".to_string(),
            date: "20 August 2023".to_string(),
            theme_tags: strings(&["Outdoor", "Rustic", "Modern"]),
            description: "Pesta kebun di tengah hutan pinus dengan nuansa hangat dan santai, diakhiri dengan pesta kembang api yang meriah.".to_string(),
            vendors: strings(&["Terralogical", "Tea Rose Wedding", "Biyan"]),
            is_featured: None,
        },
    ]
}

pub fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            id: "t1".to_string(),
            name: "Clara Santoso".to_string(),
            role: "Bride".to_string(),
            rating: 5,
            quote: "Aster & Co benar-benar mewujudkan pernikahan impian kami. Detailnya luar biasa dan tim sangat profesional. Saya tidak perlu pusing sama sekali di hari H!".to_string(),
            event_type: "Intimate Wedding".to_string(),
        },
        Testimonial {
            id: "t2".to_string(),
            name: "James Anderson".to_string(),
            role: "Groom".to_string(),
            rating: 5,
            quote: "Professional, calm, and incredibly organized. Choosing Aster & Co was the best investment for our wedding.".to_string(),
            event_type: "International Wedding".to_string(),
        },
    ]
}
