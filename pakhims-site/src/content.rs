//! Static site content
//!
//! Every record here is a compile-time constant. Sections hold references
//! into these tables and never mutate them.

use serde::Serialize;

use pakhims_widgets::layout::Position;
use pakhims_widgets::{ColorToken, NavigationItem};

/// Icon glyphs used across the site
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Activity,
    Award,
    Building,
    Calendar,
    CheckCircle,
    Clock,
    Heart,
    LogIn,
    Plus,
    Shield,
    Smartphone,
    Star,
    User,
    UserCheck,
    UserGroup,
    Zap,
}

impl Icon {
    pub const fn name(self) -> &'static str {
        match self {
            Icon::Activity => "activity",
            Icon::Award => "award",
            Icon::Building => "building",
            Icon::Calendar => "calendar",
            Icon::CheckCircle => "check-circle",
            Icon::Clock => "clock",
            Icon::Heart => "heart",
            Icon::LogIn => "log-in",
            Icon::Plus => "plus",
            Icon::Shield => "shield",
            Icon::Smartphone => "smartphone",
            Icon::Star => "star",
            Icon::User => "user",
            Icon::UserCheck => "user-check",
            Icon::UserGroup => "user-group",
            Icon::Zap => "zap",
        }
    }
}

// ============================================================================
// Navigation
// ============================================================================

/// Header navigation, top of the document first
pub const NAVIGATION: [NavigationItem; 8] = [
    NavigationItem::new("Home", "#home"),
    NavigationItem::new("Features", "#features"),
    NavigationItem::new("Stats", "#stats"),
    NavigationItem::new("Screenshots", "#screenshots"),
    NavigationItem::new("How It Works", "#how-it-works"),
    NavigationItem::new("Who It's For", "#who-its-for"),
    NavigationItem::new("Testimonials", "#testimonials"),
    NavigationItem::new("Contact", "#contact"),
];

/// Footer "Explore" links: the header navigation minus the footer itself
pub fn footer_links() -> &'static [NavigationItem] {
    &NAVIGATION[..NAVIGATION.len() - 1]
}

// ============================================================================
// Hero
// ============================================================================

pub const HERO_HEADLINE: &str = "PAKHIMS: Book Hospital Appointments with Ease";
pub const HERO_BADGE: &str = "Pakistan's Leading Healthcare Platform";
pub const HERO_SUBHEADING: &str = "Experience seamless healthcare management with intelligent scheduling, comprehensive medical records, and trusted professional care.";
pub const HEART_MESSAGE: &str = "Your Health, Our Priority";
pub const BOOK_APPOINTMENT_LABEL: &str = "Book Appointment";
pub const SIGNUP_LABEL: &str = "Pakhims Signup";

/// ECG-style icon floating over the hero background
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct MedicalIcon {
    pub icon: Icon,
    pub position: Position,
    pub size: u32,
    /// Pulse delay after each beat, in seconds
    pub delay_secs: f64,
}

pub const MEDICAL_ICONS: [MedicalIcon; 4] = [
    MedicalIcon {
        icon: Icon::Activity,
        position: Position::new(10.0, 20.0),
        size: 20,
        delay_secs: 0.0,
    },
    MedicalIcon {
        icon: Icon::Plus,
        position: Position::new(90.0, 70.0),
        size: 16,
        delay_secs: 0.1,
    },
    MedicalIcon {
        icon: Icon::Shield,
        position: Position::new(15.0, 85.0),
        size: 18,
        delay_secs: 0.2,
    },
    MedicalIcon {
        icon: Icon::Heart,
        position: Position::new(85.0, 25.0),
        size: 14,
        delay_secs: 0.3,
    },
];

pub const HERO_TRUST_BADGES: [(Icon, &str); 3] = [
    (Icon::Shield, "HIPAA Compliant & Secure"),
    (Icon::Heart, "Trusted by Healthcare Professionals"),
    (Icon::Clock, "24/7 Emergency Support"),
];

// ============================================================================
// Features
// ============================================================================

/// One node of the feature map
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct FeatureDescriptor {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
    pub stat_label: &'static str,
    pub color: ColorToken,
    pub position: Position,
}

pub const FEATURES: [FeatureDescriptor; 4] = [
    FeatureDescriptor {
        id: 1,
        title: "Smart Booking",
        description: "Appointment scheduling that finds the perfect time slot for you and your doctor, reducing wait times and optimizing your healthcare journey.",
        icon: Icon::Calendar,
        stat_label: "< 30 sec",
        color: ColorToken::Blue,
        position: Position::new(25.0, 35.0),
    },
    FeatureDescriptor {
        id: 2,
        title: "Bank-Level Security",
        description: "Advanced 256-bit encryption and multi-factor authentication protect your sensitive health data with military-grade security protocols.",
        icon: Icon::Shield,
        stat_label: "256-bit SSL",
        color: ColorToken::Green,
        position: Position::new(75.0, 35.0),
    },
    FeatureDescriptor {
        id: 3,
        title: "Verified Doctors",
        description: "Connect with licensed healthcare professionals verified through our rigorous PMDC screening process and continuous quality monitoring.",
        icon: Icon::User,
        stat_label: "500+ Doctors",
        color: ColorToken::Purple,
        position: Position::new(50.0, 65.0),
    },
    FeatureDescriptor {
        id: 4,
        title: "Cross-Platform",
        description: "Seamless experience across all devices with real-time synchronization, offline support, and native mobile applications.",
        icon: Icon::Smartphone,
        stat_label: "iOS & Android",
        color: ColorToken::Orange,
        position: Position::new(85.0, 55.0),
    },
];

/// Look up a feature by id
pub fn find_feature(id: u32) -> Option<&'static FeatureDescriptor> {
    FEATURES.iter().find(|f| f.id == id)
}

/// Badge placed around the feature map
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TrustIndicator {
    pub icon: Icon,
    pub label: &'static str,
    pub value: &'static str,
    pub position: Position,
}

pub const FEATURE_TRUST_INDICATORS: [TrustIndicator; 4] = [
    TrustIndicator {
        icon: Icon::Clock,
        label: "24/7 Support",
        value: "Always Available",
        position: Position::new(15.0, 70.0),
    },
    TrustIndicator {
        icon: Icon::Heart,
        label: "Patient Care",
        value: "50K+ Happy Patients",
        position: Position::new(35.0, 85.0),
    },
    TrustIndicator {
        icon: Icon::Star,
        label: "Top Rated",
        value: "4.9/5 Rating",
        position: Position::new(65.0, 85.0),
    },
    TrustIndicator {
        icon: Icon::CheckCircle,
        label: "Verified",
        value: "PMDC Certified",
        position: Position::new(85.0, 70.0),
    },
];

// ============================================================================
// Stats
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct StatDescriptor {
    pub value: f64,
    pub label: &'static str,
    pub suffix: &'static str,
    pub icon: Icon,
    pub color: ColorToken,
    pub description: &'static str,
}

impl StatDescriptor {
    /// Decimals needed to show `value` exactly, 0 or 1
    pub fn decimals(&self) -> usize {
        if self.value.fract() == 0.0 {
            0
        } else {
            1
        }
    }
}

pub const STATS: [StatDescriptor; 4] = [
    StatDescriptor {
        value: 50.0,
        label: "Partner Hospitals",
        suffix: "+",
        icon: Icon::Building,
        color: ColorToken::Blue,
        description: "Trusted healthcare facilities",
    },
    StatDescriptor {
        value: 500.0,
        label: "Verified Doctors",
        suffix: "+",
        icon: Icon::User,
        color: ColorToken::Green,
        description: "Licensed medical professionals",
    },
    StatDescriptor {
        value: 50000.0,
        label: "Appointments Booked",
        suffix: "+",
        icon: Icon::Calendar,
        color: ColorToken::Purple,
        description: "Successful consultations",
    },
    StatDescriptor {
        value: 99.9,
        label: "System Uptime",
        suffix: "%",
        icon: Icon::Clock,
        color: ColorToken::Orange,
        description: "Reliable 24/7 service",
    },
];

// ============================================================================
// Screenshots
// ============================================================================

/// Frame drawn around a screenshot
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Device {
    Browser,
    Phone,
}

/// Hotspot overlay on a screenshot
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ScreenshotSection {
    pub id: &'static str,
    pub label: &'static str,
    pub position: Position,
    pub description: &'static str,
    pub icon: &'static str,
    pub color: ColorToken,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ScreenshotRecord {
    pub id: u32,
    pub src: &'static str,
    pub alt: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub long_description: &'static str,
    pub color: ColorToken,
    pub sections: &'static [ScreenshotSection],
    pub category: &'static str,
    pub device: Device,
    pub stats: &'static [(&'static str, &'static str)],
}

pub const SCREENSHOTS: [ScreenshotRecord; 2] = [
    ScreenshotRecord {
        id: 1,
        src: "/images/1.png",
        alt: "PAKHIMS Web Platform Dashboard",
        title: "Web Platform",
        subtitle: "Complete Healthcare Management",
        description: "Experience our comprehensive web platform with intuitive design and powerful features.",
        long_description: "Our web platform provides a complete healthcare management solution with real-time appointment booking, doctor verification, patient records, and seamless communication tools.",
        color: ColorToken::Teal,
        sections: &[
            ScreenshotSection {
                id: "dashboard",
                label: "Smart Dashboard",
                position: Position::new(15.0, 25.0),
                description: "Comprehensive overview of your health journey with insights.",
                icon: "📊",
                color: ColorToken::Teal,
            },
            ScreenshotSection {
                id: "booking",
                label: "Quick Booking",
                position: Position::new(65.0, 20.0),
                description: "Book appointments instantly with smart time slot recommendations.",
                icon: "📅",
                color: ColorToken::Emerald,
            },
            ScreenshotSection {
                id: "doctors",
                label: "Doctor Network",
                position: Position::new(40.0, 60.0),
                description: "Browse verified healthcare professionals with detailed profiles.",
                icon: "👨‍⚕️",
                color: ColorToken::Cyan,
            },
            ScreenshotSection {
                id: "records",
                label: "Health Records",
                position: Position::new(80.0, 70.0),
                description: "Secure digital health records with easy access and sharing.",
                icon: "📋",
                color: ColorToken::Teal,
            },
        ],
        category: "Web Platform",
        device: Device::Browser,
        stats: &[("users", "25K+"), ("rating", "4.9"), ("features", "50+")],
    },
    ScreenshotRecord {
        id: 2,
        src: "/images/2.png",
        alt: "PAKHIMS Mobile App Interface",
        title: "Mobile App",
        subtitle: "Healthcare On-the-Go",
        description: "Discover our intuitive mobile app designed for seamless healthcare management.",
        long_description: "Our mobile app brings healthcare to your fingertips with biometric security, offline capabilities, push notifications, and a user-friendly interface optimized for all screen sizes.",
        color: ColorToken::Purple,
        sections: &[
            ScreenshotSection {
                id: "login",
                label: "Secure Login",
                position: Position::new(50.0, 15.0),
                description: "Biometric authentication with military-grade security.",
                icon: "🔐",
                color: ColorToken::Purple,
            },
            ScreenshotSection {
                id: "profile",
                label: "Patient Profile",
                position: Position::new(30.0, 40.0),
                description: "Complete health profile with recommendations.",
                icon: "👤",
                color: ColorToken::Violet,
            },
            ScreenshotSection {
                id: "appointments",
                label: "My Appointments",
                position: Position::new(70.0, 55.0),
                description: "Manage all your appointments with smart reminders.",
                icon: "⏰",
                color: ColorToken::Indigo,
            },
            ScreenshotSection {
                id: "chat",
                label: "Doctor Chat",
                position: Position::new(50.0, 80.0),
                description: "Secure messaging with healthcare professionals.",
                icon: "💬",
                color: ColorToken::Purple,
            },
        ],
        category: "Mobile App",
        device: Device::Phone,
        stats: &[("downloads", "10K+"), ("rating", "4.8"), ("reviews", "500+")],
    },
];

// ============================================================================
// How it works
// ============================================================================

/// Outline of a journey node
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    Circle,
    Diamond,
    Hexagon,
    Star,
}

impl Shape {
    /// Rotation applied to the outline, in degrees
    pub const fn rotation(self) -> f64 {
        match self {
            Shape::Diamond => 45.0,
            _ => 0.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct JourneyStep {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
    pub color: ColorToken,
    pub details: [&'static str; 3],
    /// Horizontal position along the wave, in percent
    pub position: f64,
    pub shape: Shape,
}

pub const JOURNEY_STEPS: [JourneyStep; 4] = [
    JourneyStep {
        id: 1,
        title: "Secure Login",
        description: "Create your account or sign in securely with bank-level encryption to protect your personal health information.",
        icon: Icon::LogIn,
        color: ColorToken::Emerald,
        details: [
            "Biometric authentication support",
            "End-to-end encryption",
            "Multi-layer security protocols",
        ],
        position: 15.0,
        shape: Shape::Diamond,
    },
    JourneyStep {
        id: 2,
        title: "Smart Profile",
        description: "Profile that learns from your health patterns and provides personalized recommendations.",
        icon: Icon::User,
        color: ColorToken::Violet,
        details: ["Health insights", "Smart medication tracking", "Predictive health alerts"],
        position: 35.0,
        shape: Shape::Circle,
    },
    JourneyStep {
        id: 3,
        title: "Doctor Match",
        description: "Advanced matching system finds the perfect healthcare professional based on your specific needs.",
        icon: Icon::UserCheck,
        color: ColorToken::Rose,
        details: ["Matching", "Real-time availability sync", "Patient review analysis"],
        position: 60.0,
        shape: Shape::Hexagon,
    },
    JourneyStep {
        id: 4,
        title: "Instant Booking",
        description: "Revolutionary one-click booking with smart scheduling that optimizes for both you and your provider.",
        icon: Icon::Calendar,
        color: ColorToken::Amber,
        details: [
            "One-click smart booking",
            "Dynamic pricing optimization",
            "Automated follow-up care",
        ],
        position: 85.0,
        shape: Shape::Star,
    },
];

pub fn find_step(id: u32) -> Option<&'static JourneyStep> {
    JOURNEY_STEPS.iter().find(|s| s.id == id)
}

pub const JOURNEY_TRUST_FEATURES: [(Icon, &str, &str, ColorToken); 4] = [
    (Icon::Shield, "Ultra Secure", "Military-grade encryption", ColorToken::Emerald),
    (Icon::Zap, "Lightning Fast", "Sub-second responses", ColorToken::Violet),
    (Icon::Heart, "Deeply Caring", "Patient-first always", ColorToken::Rose),
    (Icon::Award, "Award Winning", "Industry recognized", ColorToken::Amber),
];

// ============================================================================
// Who it's for
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Audience {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
    pub color: ColorToken,
}

pub const AUDIENCES: [Audience; 6] = [
    Audience {
        id: 1,
        title: "Patients",
        description: "Easily book appointments, manage health records, and communicate with doctors from anywhere.",
        icon: Icon::User,
        color: ColorToken::Emerald,
    },
    Audience {
        id: 2,
        title: "Healthcare Providers",
        description: "Streamline patient management, access real-time data, and enhance care delivery.",
        icon: Icon::Heart,
        color: ColorToken::Sapphire,
    },
    Audience {
        id: 3,
        title: "Caregivers",
        description: "Monitor loved ones' health, schedule visits, and stay updated with personalized insights.",
        icon: Icon::UserGroup,
        color: ColorToken::Yellow,
    },
    Audience {
        id: 4,
        title: "Healthcare Administrators",
        description: "Optimize operations, manage resources, and improve patient outcomes with data-driven insights.",
        icon: Icon::UserGroup,
        color: ColorToken::Emerald,
    },
    Audience {
        id: 5,
        title: "Insurance Providers",
        description: "Access patient data securely, streamline claims processing, and enhance service delivery.",
        icon: Icon::UserGroup,
        color: ColorToken::Sapphire,
    },
    Audience {
        id: 6,
        title: "Researchers",
        description: "Utilize aggregated health data for studies, improving healthcare practices and innovations.",
        icon: Icon::UserGroup,
        color: ColorToken::Yellow,
    },
];

// ============================================================================
// Testimonials
// ============================================================================

/// Star rating, always within 1..=5
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Rating(u8);

impl Rating {
    pub const MAX: u8 = 5;

    /// Fails to compile when used in a const with an out-of-range value
    pub(crate) const fn new(stars: u8) -> Self {
        assert!(stars >= 1 && stars <= Self::MAX, "rating must be within 1..=5");
        Self(stars)
    }

    /// `None` outside 1..=5
    pub const fn try_new(stars: u8) -> Option<Self> {
        if stars >= 1 && stars <= Self::MAX {
            Some(Self(stars))
        } else {
            None
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// Filled flag of each of the five stars
    pub fn stars(self) -> [bool; 5] {
        std::array::from_fn(|i| i < usize::from(self.0))
    }
}

/// Doctors list a specialty, patients the condition they were treated for
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Focus {
    Specialty(&'static str),
    Condition(&'static str),
}

/// Doctors list their experience, patients when they joined
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tenure {
    Experience(&'static str),
    MemberSince(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TestimonialRecord {
    pub id: u32,
    pub name: &'static str,
    pub role: &'static str,
    pub location: &'static str,
    pub image: &'static str,
    pub rating: Rating,
    pub text: &'static str,
    pub focus: Focus,
    pub tenure: Tenure,
    pub appointments: &'static str,
}

pub const TESTIMONIALS: [TestimonialRecord; 5] = [
    TestimonialRecord {
        id: 1,
        name: "Dr. Zahid",
        role: "Cardiologist",
        location: "Rahim Yar khan",
        image: "/images/drZahid.jpg",
        rating: Rating::new(5),
        text: "PAKHIMS has revolutionized how I manage my practice. The seamless appointment system and patient management tools have increased my efficiency by 40%. It's truly the future of healthcare management.",
        focus: Focus::Specialty("Heart Specialist"),
        tenure: Tenure::Experience("10+ years"),
        appointments: "2,500+",
    },
    TestimonialRecord {
        id: 2,
        name: "Dr Zahoor Ahmad",
        role: "Peads Surgeon",
        location: "Rahim yar khan",
        image: "https://pakhims.com/public/uploads/c4e5142e-6074-47b3-9a82-c8af6570009d-Zahoor%20pic.jpg",
        rating: Rating::new(5),
        text: "Finding the right doctor was always a challenge until I discovered PAKHIMS. The platform made it incredibly easy to book appointments and access my medical records. Outstanding service!",
        focus: Focus::Condition("Diabetes Management"),
        tenure: Tenure::MemberSince("2023"),
        appointments: "12 visits",
    },
    TestimonialRecord {
        id: 3,
        name: "Dr sultan mahmood",
        role: "Pediatrician",
        location: "Islamabad",
        image: "https://pakhims.com/public/uploads/e834853b-b94b-4749-b12b-84bb239b9795-photo%20ceo.jpg",
        rating: Rating::new(5),
        text: "The patient communication features and scheduling system have transformed my practice. Parents can easily book appointments and track their children's health records. Highly recommended!",
        focus: Focus::Specialty("Child Healthcare"),
        tenure: Tenure::Experience("12+ years"),
        appointments: "3,200+",
    },
    TestimonialRecord {
        id: 4,
        name: "Muhammad Azhar Sattar",
        role: "Patient",
        location: "Rawalpindi",
        image: "https://pakhims.com/public/uploads/bfec4ad1-9517-4d01-81fa-6a1c530e5d27-1000091335.jpg",
        rating: Rating::new(5),
        text: "PAKHIMS saved me time and stress during my pregnancy. Easy appointment booking, timely reminders, and access to all my reports in one place. Exceptional healthcare platform!",
        focus: Focus::Condition("Maternity Care"),
        tenure: Tenure::MemberSince("2022"),
        appointments: "25 visits",
    },
    TestimonialRecord {
        id: 5,
        name: "DR FAROOR BHUTTA",
        role: "Otolaryngologist",
        location: "Peshawar",
        image: "https://pakhims.com/public/uploads/eae0b732-ff19-4c32-a805-6d94796fd8f3-photo.jpeg",
        rating: Rating::new(5),
        text: "The analytics and patient management features help me provide better care. The platform's reliability and user-friendly interface make it indispensable for modern medical practice.",
        focus: Focus::Specialty("Bone & Joint Care"),
        tenure: Tenure::Experience("18+ years"),
        appointments: "4,100+",
    },
];

/// `(value, label, description)`
pub const TESTIMONIAL_TRUST_STATS: [(&str, &str, &str); 4] = [
    ("98%", "Satisfaction Rate", "Patient & Doctor Satisfaction"),
    ("50K+", "Active Users", "Growing Community"),
    ("4.9", "App Rating", "5-Star Reviews"),
    ("24/7", "Support", "Always Available"),
];

// ============================================================================
// Footer
// ============================================================================

pub const FOOTER_TAGLINE: &str = "Empowering healthcare with innovative solutions for patients, providers, and beyond.";
pub const CONTACT_EMAIL: &str = "info@pakhims.com";
pub const CONTACT_PHONE: &str = "+92 123 456 7890";
pub const CONTACT_ADDRESS: &str = "123 Health Lane, Karachi, Pakistan";
pub const COPYRIGHT: &str = "© 2025 PAKHIMS. All rights reserved. Designed with ♥ by the PAKHIMS Team.";

// ============================================================================
// Privacy policy
// ============================================================================

pub const PRIVACY_TITLE: &str = "Privacy Policy For PAK Health App";

/// One numbered section of the privacy policy
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PolicySection {
    pub title: &'static str,
    pub text: Option<&'static str>,
    /// `(heading, text)` pairs
    pub subsections: &'static [(&'static str, &'static str)],
    pub list: &'static [&'static str],
}

impl PolicySection {
    const fn text(title: &'static str, text: &'static str) -> Self {
        Self { title, text: Some(text), subsections: &[], list: &[] }
    }
}

pub const PRIVACY_SECTIONS: [PolicySection; 14] = [
    PolicySection::text(
        "1. Introduction",
        "Curely Health (\"we\", \"us\", \"our\") operates the Curely Health mobile application (the \"App\"). This Privacy Policy explains how we collect, use, disclose, and protect your personal and health information when you use our App.",
    ),
    PolicySection {
        title: "2. Information We Collect",
        text: None,
        subsections: &[
            (
                "2.1 Personal Information",
                "We may collect information that identifies you such as your name, phone number, email, date of birth, national ID (e.g., CNIC), and similar identifiers when you create an account or register with a hospital.",
            ),
            (
                "2.2 Health and Medical Information",
                "To provide healthcare features (appointments, medical records, prescriptions), we may collect medical information such as appointment history, diagnoses, prescribed medications, uploaded medical documents, test results, and other health-related information you or your healthcare provider provide.",
            ),
            (
                "2.3 Device and Usage Data",
                "We automatically collect device information (device model, OS, app version), analytics and usage information (pages visited, features used), and crash reports to improve the App.",
            ),
            (
                "2.4 Location and Photos",
                "If you permit, we may access photos/images (for document upload) and approximate device location (to show nearby hospitals). Such access is only with your explicit permission.",
            ),
        ],
        list: &[],
    },
    PolicySection {
        title: "3. How We Use Your Information",
        text: None,
        subsections: &[],
        list: &[
            "To provide and operate the App features, including booking and managing appointments.",
            "To communicate with you about appointments, reminders, and service updates.",
            "To process, store and share medical records with authorized healthcare providers when needed for treatment.",
            "To improve, test and monitor the App and ensure its security.",
            "To comply with legal and regulatory obligations.",
        ],
    },
    PolicySection::text(
        "4. Legal Basis & Consent",
        "By using the App and providing your information, you consent to the collection and processing described in this policy. For sensitive health data, we rely on your explicit consent and on lawful bases necessary for delivering health services to you.",
    ),
    PolicySection {
        title: "5. Sharing & Disclosure",
        text: Some("We do not sell your personal or medical data. We may share information with:"),
        subsections: &[],
        list: &[
            "Healthcare providers and hospitals as required to deliver care and services.",
            "Third-party service providers (cloud, analytics, push notifications) who process data on our behalf and under contract.",
            "Legal or regulatory authorities when required by law.",
        ],
    },
    PolicySection::text(
        "6. Third-Party Services & Links",
        "The App may use third-party services (for example, cloud storage, analytics, payment services). Those providers have their own privacy policies, and we recommend you review them. We do not control their practices.",
    ),
    PolicySection::text(
        "7. Security",
        "We use industry-standard security measures (encryption in transit and at rest where applicable) to protect data. However, no method of transmission or storage is 100% secure. You are responsible for keeping your device and account credentials secure.",
    ),
    PolicySection::text(
        "8. Data Retention",
        "We retain your personal and medical data for as long as necessary to provide services and as required by applicable laws. You may request deletion of your account and data; see the \"Your Rights\" section below.",
    ),
    PolicySection {
        title: "9. Your Rights",
        text: None,
        subsections: &[],
        list: &[
            "Access: You can request access to your data.",
            "Correction: You can request correction of inaccurate information.",
            "Deletion: You can request deletion of your account and data subject to legal retention requirements.",
            "Objection: You can object to certain data processing where permitted by law.",
        ],
    },
    PolicySection::text(
        "10. Children",
        "The App is not intended for children under 13 (or the minimum age in your jurisdiction). We do not knowingly collect personal information from children without parental consent.",
    ),
    PolicySection::text(
        "11. Cookies & Tracking",
        "We may use cookies or similar technologies in our web interfaces and SDKs to provide and monitor the service. You can control cookies via browser/device settings and app permissions.",
    ),
    PolicySection::text(
        "12. International Transfers",
        "Your data may be stored or processed in countries outside your residence. We take steps to ensure adequate safeguards for such transfers.",
    ),
    PolicySection::text(
        "13. Changes to This Policy",
        "We may update this policy from time to time. We will post the updated version with a new effective date and notify you as required by law.",
    ),
    PolicySection::text(
        "14. Contact",
        "If you have questions, email privacy@pakhims.com or visit profile.pakhims.com.",
    ),
];

pub const PRIVACY_CONTACT_LINKS: [(&str, &str); 2] = [
    ("privacy@pakhims.com", "mailto:privacy@pakhims.com"),
    ("profile.pakhims.com", "https://profile.pakhims.com"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_screenshot_sections_unique_and_in_bounds() {
        for shot in &SCREENSHOTS {
            let ids: BTreeSet<_> = shot.sections.iter().map(|s| s.id).collect();
            assert_eq!(ids.len(), shot.sections.len(), "duplicate hotspot in {}", shot.title);
            for section in shot.sections {
                assert!(section.position.is_within_bounds());
            }
        }
    }

    #[test]
    fn test_testimonial_ratings_and_roles() {
        assert_eq!(TESTIMONIALS.len(), 5);
        for record in &TESTIMONIALS {
            assert!((1..=Rating::MAX).contains(&record.rating.get()));
            let doctor_shape = matches!(
                (record.focus, record.tenure),
                (Focus::Specialty(_), Tenure::Experience(_))
            );
            let patient_shape = matches!(
                (record.focus, record.tenure),
                (Focus::Condition(_), Tenure::MemberSince(_))
            );
            assert!(doctor_shape || patient_shape, "{} mixes roles", record.name);
        }
    }

    #[test]
    fn test_rating_stars() {
        assert_eq!(Rating::new(3).stars(), [true, true, true, false, false]);
    }

    #[test]
    fn test_rating_try_new_rejects_out_of_range() {
        assert_eq!(Rating::try_new(0), None);
        assert_eq!(Rating::try_new(6), None);
        assert_eq!(Rating::try_new(5).map(Rating::get), Some(5));
    }

    #[test]
    fn test_stat_decimals() {
        let decimals: Vec<usize> = STATS.iter().map(StatDescriptor::decimals).collect();
        assert_eq!(decimals, vec![0, 0, 0, 1]);
    }

    #[test]
    fn test_lookups() {
        assert_eq!(find_feature(3).map(|f| f.title), Some("Verified Doctors"));
        assert!(find_feature(99).is_none());
        assert_eq!(find_step(4).map(|s| s.shape), Some(Shape::Star));
        assert!(find_step(0).is_none());
    }

    #[test]
    fn test_footer_links_skip_contact() {
        assert_eq!(footer_links().len(), 7);
        assert!(footer_links().iter().all(|item| item.href != "#contact"));
    }
}
