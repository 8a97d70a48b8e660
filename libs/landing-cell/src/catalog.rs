//! Fixed content shown on the landing page.
//!
//! Everything here is `'static` constant data. The profile table is checked at
//! compile time: it must be non-empty and its ids strictly ascending, so the
//! showcase modulus is always defined and lookups by id are unambiguous.

use std::num::NonZeroUsize;

use crate::models::{
    LandingContent, PricingTier, ProcessStep, Profile, ProfileId, Rating, Service,
    Specialization, Testimonial,
};

const PROFILE_TABLE: [Profile; 6] = [
    Profile {
        id: ProfileId(1),
        name: "Dr. Thomas Weber",
        specialty: "Cardiology",
        experience: "22 years experience",
        rating: Rating::from_tenths(49),
        languages: &["German", "English"],
        location: "Munich, Germany",
        image: "/images/doctors/thomas-weber.jpg",
        certifications: &[
            "Board Certified Cardiologist",
            "European Society of Cardiology Fellow",
        ],
        fee: "€150 per consultation",
        about: "Interventional cardiologist focused on minimally invasive valve procedures and post-operative remote follow-up.",
    },
    Profile {
        id: ProfileId(2),
        name: "Dr. Petra Schmidt",
        specialty: "Orthopedic Surgery",
        experience: "18 years experience",
        rating: Rating::from_tenths(48),
        languages: &["German", "English", "Spanish"],
        location: "Berlin, Germany",
        image: "/images/doctors/petra-schmidt.jpg",
        certifications: &[
            "German Board of Orthopedics",
            "AO Trauma Faculty",
            "Sports Medicine Certificate",
        ],
        fee: "€180 per consultation",
        about: "Joint replacement and sports injury specialist who has treated international patients from over thirty countries.",
    },
    Profile {
        id: ProfileId(3),
        name: "Dr. Ahmet Yilmaz",
        specialty: "Oncology",
        experience: "15 years experience",
        rating: Rating::from_tenths(47),
        languages: &["Turkish", "English", "German", "Arabic"],
        location: "Istanbul, Turkey",
        image: "/images/doctors/ahmet-yilmaz.jpg",
        certifications: &["ESMO Certified Medical Oncologist", "JCI Accredited Hospital Staff"],
        fee: "€140 per consultation",
        about: "Medical oncologist offering second opinions on treatment plans and coordinating multidisciplinary tumour boards.",
    },
    Profile {
        id: ProfileId(4),
        name: "Dr. Elena Rossi",
        specialty: "Neurology",
        experience: "20 years experience",
        rating: Rating::from_tenths(49),
        languages: &["Italian", "English", "French"],
        location: "Milan, Italy",
        image: "/images/doctors/elena-rossi.jpg",
        certifications: &["European Board of Neurology", "Headache Medicine Certificate"],
        fee: "€170 per consultation",
        about: "Neurologist specialising in movement disorders and chronic migraine, with a strong telemedicine practice.",
    },
    Profile {
        id: ProfileId(5),
        name: "Dr. Jan Kowalski",
        specialty: "Plastic Surgery",
        experience: "12 years experience",
        rating: Rating::from_tenths(46),
        languages: &["Polish", "English"],
        location: "Warsaw, Poland",
        image: "/images/doctors/jan-kowalski.jpg",
        certifications: &["EBOPRAS Certified", "ISAPS Member"],
        fee: "€120 per consultation",
        about: "Reconstructive and aesthetic surgeon who plans procedures remotely and follows recovery by video.",
    },
    Profile {
        id: ProfileId(6),
        name: "Dr. Sofia Lindqvist",
        specialty: "Fertility & IVF",
        experience: "16 years experience",
        rating: Rating::from_tenths(48),
        languages: &["Swedish", "English", "German"],
        location: "Stockholm, Sweden",
        image: "/images/doctors/sofia-lindqvist.jpg",
        certifications: &["ESHRE Certified Embryologist", "Reproductive Endocrinology Board"],
        fee: "€160 per consultation",
        about: "Reproductive medicine specialist guiding couples through IVF cycles across borders.",
    },
];

pub static PROFILES: [Profile; 6] = PROFILE_TABLE;

pub const PROFILE_COUNT: NonZeroUsize = match NonZeroUsize::new(PROFILE_TABLE.len()) {
    Some(count) => count,
    None => panic!("profile table must not be empty"),
};

const fn ids_strictly_ascending(profiles: &[Profile]) -> bool {
    let mut i = 1;
    while i < profiles.len() {
        if profiles[i - 1].id.0 >= profiles[i].id.0 {
            return false;
        }
        i += 1;
    }
    true
}

const _: () = assert!(
    ids_strictly_ascending(&PROFILE_TABLE),
    "profile ids must be unique and ascending"
);

pub const SERVICES: [Service; 4] = [
    Service {
        title: "Video Consultations",
        description: "Speak with a vetted European specialist from home before you decide to travel.",
        highlights: &["HD video", "Interpreter on request", "Recorded summary"],
    },
    Service {
        title: "Second Opinions",
        description: "Have your diagnosis and treatment plan reviewed by a leading expert in the field.",
        highlights: &["Written report", "Imaging review", "Response within 5 days"],
    },
    Service {
        title: "Treatment Coordination",
        description: "We arrange hospital admission, scheduling, and medical records transfer.",
        highlights: &["Dedicated case manager", "Cost estimate up front"],
    },
    Service {
        title: "Travel & Stay",
        description: "Visa letters, airport transfer, and recovery accommodation close to your clinic.",
        highlights: &["Visa support", "Partner hotels", "Companion travel"],
    },
];

pub const SPECIALIZATIONS: [Specialization; 8] = [
    Specialization {
        name: "Cardiology",
        description: "Heart valve repair, bypass surgery, and rhythm disorders.",
        doctor_count_label: "45+ specialists",
    },
    Specialization {
        name: "Orthopedics",
        description: "Hip and knee replacement, spine surgery, sports injuries.",
        doctor_count_label: "60+ specialists",
    },
    Specialization {
        name: "Oncology",
        description: "Second opinions, proton therapy, and immunotherapy.",
        doctor_count_label: "38+ specialists",
    },
    Specialization {
        name: "Neurology",
        description: "Epilepsy, movement disorders, and neurosurgery.",
        doctor_count_label: "30+ specialists",
    },
    Specialization {
        name: "Plastic Surgery",
        description: "Reconstructive and aesthetic procedures.",
        doctor_count_label: "25+ specialists",
    },
    Specialization {
        name: "Fertility & IVF",
        description: "IVF, egg freezing, and reproductive endocrinology.",
        doctor_count_label: "20+ specialists",
    },
    Specialization {
        name: "Dental Care",
        description: "Implants, veneers, and full-mouth restoration.",
        doctor_count_label: "50+ specialists",
    },
    Specialization {
        name: "Ophthalmology",
        description: "LASIK, cataract surgery, and retinal care.",
        doctor_count_label: "28+ specialists",
    },
];

pub const PROCESS_STEPS: [ProcessStep; 4] = [
    ProcessStep {
        step: 1,
        title: "Create your account",
        description: "Register in minutes and tell us what kind of care you are looking for.",
    },
    ProcessStep {
        step: 2,
        title: "Share your case",
        description: "Upload reports and imaging. Your data is encrypted and handled under GDPR.",
    },
    ProcessStep {
        step: 3,
        title: "Meet your specialist",
        description: "Book a video consultation with a doctor matched to your condition and language.",
    },
    ProcessStep {
        step: 4,
        title: "Plan your treatment",
        description: "Receive a written plan, a cost estimate, and help organising your trip.",
    },
];

pub const PRICING_TIERS: [PricingTier; 3] = [
    PricingTier {
        name: "Consultation",
        price_label: "€49",
        period_label: "per booking",
        features: &[
            "Specialist matching",
            "Secure video room",
            "Pay by card via Stripe or PayPal",
        ],
        highlighted: false,
    },
    PricingTier {
        name: "Care Plus",
        price_label: "€129",
        period_label: "per month",
        features: &[
            "Unlimited specialist messaging",
            "Two video consultations per month",
            "Second opinion reports",
            "Priority scheduling",
        ],
        highlighted: true,
    },
    PricingTier {
        name: "Concierge",
        price_label: "€399",
        period_label: "per treatment case",
        features: &[
            "Dedicated case manager",
            "Hospital and travel coordination",
            "Interpreter during your stay",
            "Post-treatment follow-up",
        ],
        highlighted: false,
    },
];

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        author: "Maria G.",
        origin: "Madrid, Spain",
        treatment: "Knee replacement",
        quote: "I spoke to my surgeon three times by video before flying to Berlin. Nothing about the trip felt uncertain.",
        rating: Rating::from_tenths(50),
    },
    Testimonial {
        author: "James O.",
        origin: "Dublin, Ireland",
        treatment: "Cardiac second opinion",
        quote: "The report changed my treatment plan and spared me an operation I did not need.",
        rating: Rating::from_tenths(49),
    },
    Testimonial {
        author: "Layla H.",
        origin: "Dubai, UAE",
        treatment: "IVF programme",
        quote: "Having a doctor who spoke my language made every step easier.",
        rating: Rating::from_tenths(48),
    },
];

pub fn profiles() -> &'static [Profile] {
    &PROFILES
}

pub fn profile_count() -> NonZeroUsize {
    PROFILE_COUNT
}

pub fn find_profile(id: ProfileId) -> Option<&'static Profile> {
    PROFILES
        .binary_search_by_key(&id, |profile| profile.id)
        .ok()
        .map(|index| &PROFILES[index])
}

/// Profile shown at a showcase position. Positions wrap around the table.
pub fn profile_at(index: usize) -> &'static Profile {
    &PROFILES[index % PROFILE_COUNT.get()]
}

pub fn content() -> LandingContent {
    LandingContent {
        profiles: &PROFILES,
        services: &SERVICES,
        specializations: &SPECIALIZATIONS,
        process_steps: &PROCESS_STEPS,
        pricing_tiers: &PRICING_TIERS,
        testimonials: &TESTIMONIALS,
    }
}
