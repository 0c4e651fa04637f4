//! Seed data loaded at startup. Nothing here is persisted or mutated in place.

use super::domain::{
    Candidate, CandidateId, CandidateStatus, JobId, JobPosting, JobStatus, MatchResult, Score,
};

struct JobSeed {
    title: &'static str,
    company: &'static str,
    location: &'static str,
    employment_type: &'static str,
    salary: &'static str,
    applicants: u32,
    posted: &'static str,
    description: &'static str,
    requirements: &'static [&'static str],
    status: JobStatus,
}

const JOB_SEEDS: [JobSeed; 6] = [
    JobSeed {
        title: "Senior Full Stack Developer",
        company: "TechCorp Inc.",
        location: "San Francisco, CA",
        employment_type: "Full-time",
        salary: "$120,000 - $160,000",
        applicants: 42,
        posted: "3 days ago",
        description: "We're looking for an experienced full stack developer to join our growing team. You'll work on cutting-edge projects using React, Node.js, and cloud technologies.",
        requirements: &["5+ years experience", "React/Node.js", "AWS/Azure", "Team leadership"],
        status: JobStatus::Active,
    },
    JobSeed {
        title: "UX/UI Designer",
        company: "Design Studio Pro",
        location: "New York, NY",
        employment_type: "Full-time",
        salary: "$85,000 - $110,000",
        applicants: 28,
        posted: "5 days ago",
        description: "Join our creative team to design beautiful and intuitive user experiences. Work on web and mobile applications for diverse clients.",
        requirements: &["3+ years UX/UI", "Figma/Sketch", "Design systems", "User research"],
        status: JobStatus::Active,
    },
    JobSeed {
        title: "DevOps Engineer",
        company: "CloudTech Solutions",
        location: "Austin, TX",
        employment_type: "Full-time",
        salary: "$100,000 - $140,000",
        applicants: 35,
        posted: "1 week ago",
        description: "Help us build and maintain scalable infrastructure. Work with Kubernetes, Docker, and CI/CD pipelines in a fast-paced environment.",
        requirements: &["4+ years DevOps", "Kubernetes", "Docker", "CI/CD", "Monitoring"],
        status: JobStatus::Active,
    },
    JobSeed {
        title: "Product Manager",
        company: "Innovation Labs",
        location: "Seattle, WA",
        employment_type: "Full-time",
        salary: "$130,000 - $170,000",
        applicants: 56,
        posted: "2 days ago",
        description: "Lead product strategy and development for our SaaS platform. Work closely with engineering and design teams to deliver exceptional user experiences.",
        requirements: &["5+ years PM experience", "SaaS background", "Agile/Scrum", "Analytics"],
        status: JobStatus::Hot,
    },
    JobSeed {
        title: "Data Scientist",
        company: "AI Innovations",
        location: "Boston, MA",
        employment_type: "Full-time",
        salary: "$110,000 - $150,000",
        applicants: 31,
        posted: "4 days ago",
        description: "Use machine learning and statistical analysis to drive business insights. Work with large datasets and modern ML frameworks.",
        requirements: &["PhD or Masters", "Python/R", "ML frameworks", "Statistics"],
        status: JobStatus::Active,
    },
    JobSeed {
        title: "Frontend Developer",
        company: "WebTech Agency",
        location: "Remote",
        employment_type: "Contract",
        salary: "$70 - $90/hour",
        applicants: 67,
        posted: "6 days ago",
        description: "Build responsive and interactive web applications using modern frontend technologies. Remote-first company with flexible hours.",
        requirements: &["3+ years frontend", "React/Vue", "TypeScript", "Responsive design"],
        status: JobStatus::Active,
    },
];

struct CandidateSeed {
    name: &'static str,
    applied_job: &'static str,
    status: &'static str,
    ai_score: u8,
    email: &'static str,
    phone: &'static str,
    notice_period: &'static str,
    current_location: &'static str,
    current_salary: &'static str,
    expected_salary: &'static str,
    avatar: &'static str,
}

const CANDIDATE_SEEDS: [CandidateSeed; 8] = [
    CandidateSeed {
        name: "Alice Johnson",
        applied_job: "Senior Full Stack Developer",
        status: "Interview Scheduled",
        ai_score: 92,
        email: "alice.johnson@email.com",
        phone: "+1 (555) 123-4567",
        notice_period: "2 weeks",
        current_location: "San Francisco, CA",
        current_salary: "$135,000",
        expected_salary: "$155,000",
        avatar: "AJ",
    },
    CandidateSeed {
        name: "Michael Chen",
        applied_job: "UX/UI Designer",
        status: "Under Review",
        ai_score: 88,
        email: "michael.chen@email.com",
        phone: "+1 (555) 234-5678",
        notice_period: "1 month",
        current_location: "New York, NY",
        current_salary: "$95,000",
        expected_salary: "$115,000",
        avatar: "MC",
    },
    CandidateSeed {
        name: "Sarah Williams",
        applied_job: "DevOps Engineer",
        status: "Technical Assessment",
        ai_score: 95,
        email: "sarah.williams@email.com",
        phone: "+1 (555) 345-6789",
        notice_period: "3 weeks",
        current_location: "Austin, TX",
        current_salary: "$120,000",
        expected_salary: "$140,000",
        avatar: "SW",
    },
    CandidateSeed {
        name: "David Rodriguez",
        applied_job: "Product Manager",
        status: "Final Interview",
        ai_score: 90,
        email: "david.rodriguez@email.com",
        phone: "+1 (555) 456-7890",
        notice_period: "1 month",
        current_location: "Seattle, WA",
        current_salary: "$145,000",
        expected_salary: "$165,000",
        avatar: "DR",
    },
    CandidateSeed {
        name: "Emma Thompson",
        applied_job: "Data Scientist",
        status: "Offer Extended",
        ai_score: 87,
        email: "emma.thompson@email.com",
        phone: "+1 (555) 567-8901",
        notice_period: "2 weeks",
        current_location: "Boston, MA",
        current_salary: "$125,000",
        expected_salary: "$145,000",
        avatar: "ET",
    },
    CandidateSeed {
        name: "James Wilson",
        applied_job: "Frontend Developer",
        status: "Under Review",
        ai_score: 83,
        email: "james.wilson@email.com",
        phone: "+1 (555) 678-9012",
        notice_period: "Immediate",
        current_location: "Remote",
        current_salary: "$85,000",
        expected_salary: "$95,000",
        avatar: "JW",
    },
    CandidateSeed {
        name: "Lisa Brown",
        applied_job: "Product Manager",
        status: "Interview Scheduled",
        ai_score: 91,
        email: "lisa.brown@email.com",
        phone: "+1 (555) 789-0123",
        notice_period: "1 month",
        current_location: "Chicago, IL",
        current_salary: "$130,000",
        expected_salary: "$150,000",
        avatar: "LB",
    },
    CandidateSeed {
        name: "Robert Garcia",
        applied_job: "DevOps Engineer",
        status: "Technical Assessment",
        ai_score: 86,
        email: "robert.garcia@email.com",
        phone: "+1 (555) 890-1234",
        notice_period: "2 weeks",
        current_location: "Denver, CO",
        current_salary: "$110,000",
        expected_salary: "$130,000",
        avatar: "RG",
    },
];

struct MatchSeed {
    candidate: CandidateSeed,
    match_percentage: u8,
    skills: &'static [&'static str],
    experience: &'static str,
}

const MATCH_SEEDS: [MatchSeed; 5] = [
    MatchSeed {
        candidate: CandidateSeed {
            name: "Alice Johnson",
            applied_job: "",
            status: "Available",
            ai_score: 92,
            email: "alice.johnson@email.com",
            phone: "+1 (555) 123-4567",
            notice_period: "2 weeks",
            current_location: "San Francisco, CA",
            current_salary: "$135,000",
            expected_salary: "$155,000",
            avatar: "AJ",
        },
        match_percentage: 95,
        skills: &["React", "TypeScript", "Node.js", "AWS", "GraphQL"],
        experience: "7 years",
    },
    MatchSeed {
        candidate: CandidateSeed {
            name: "Michael Chen",
            applied_job: "",
            status: "Interviewing",
            ai_score: 88,
            email: "michael.chen@email.com",
            phone: "+1 (555) 234-5678",
            notice_period: "1 month",
            current_location: "New York, NY",
            current_salary: "$95,000",
            expected_salary: "$115,000",
            avatar: "MC",
        },
        match_percentage: 92,
        skills: &["Figma", "UI/UX", "Adobe XD", "Sketch"],
        experience: "5 years",
    },
    MatchSeed {
        candidate: CandidateSeed {
            name: "Sarah Williams",
            applied_job: "",
            status: "Open to offers",
            ai_score: 95,
            email: "sarah.williams@email.com",
            phone: "+1 (555) 345-6789",
            notice_period: "3 weeks",
            current_location: "Austin, TX",
            current_salary: "$120,000",
            expected_salary: "$140,000",
            avatar: "SW",
        },
        match_percentage: 89,
        skills: &["DevOps", "Docker", "Kubernetes", "AWS", "CI/CD"],
        experience: "6 years",
    },
    MatchSeed {
        candidate: CandidateSeed {
            name: "Robert Garcia",
            applied_job: "",
            status: "Looking",
            ai_score: 86,
            email: "robert.garcia@email.com",
            phone: "+1 (555) 890-1234",
            notice_period: "2 weeks",
            current_location: "Denver, CO",
            current_salary: "$110,000",
            expected_salary: "$130,000",
            avatar: "RG",
        },
        match_percentage: 84,
        skills: &["AWS", "Docker", "Jenkins", "Terraform", "Linux"],
        experience: "4 years",
    },
    MatchSeed {
        candidate: CandidateSeed {
            name: "Emma Thompson",
            applied_job: "",
            status: "Available",
            ai_score: 87,
            email: "emma.thompson@email.com",
            phone: "+1 (555) 567-8901",
            notice_period: "2 weeks",
            current_location: "Boston, MA",
            current_salary: "$125,000",
            expected_salary: "$145,000",
            avatar: "ET",
        },
        match_percentage: 82,
        skills: &["Python", "TensorFlow", "PyTorch", "NLP", "Data Analysis"],
        experience: "5.5 years",
    },
];

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

impl CandidateSeed {
    fn build(&self, id: CandidateId) -> Candidate {
        Candidate {
            id,
            name: self.name.to_string(),
            applied_job: self.applied_job.to_string(),
            status: CandidateStatus::from(self.status),
            ai_score: Score::saturating(self.ai_score),
            email: self.email.to_string(),
            phone: self.phone.to_string(),
            notice_period: self.notice_period.to_string(),
            current_location: self.current_location.to_string(),
            current_salary: self.current_salary.to_string(),
            expected_salary: self.expected_salary.to_string(),
            skills: Vec::new(),
            experience: None,
            avatar: self.avatar.to_string(),
        }
    }
}

/// Job postings shown on the jobs screen at startup, ids `1..=6`.
pub fn jobs() -> Vec<JobPosting> {
    JOB_SEEDS
        .iter()
        .zip(1u32..)
        .map(|(seed, id)| JobPosting {
            id: JobId(id),
            title: seed.title.to_string(),
            company: seed.company.to_string(),
            location: seed.location.to_string(),
            employment_type: seed.employment_type.to_string(),
            salary: seed.salary.to_string(),
            applicants: seed.applicants,
            posted: seed.posted.to_string(),
            description: seed.description.to_string(),
            requirements: owned(seed.requirements),
            status: seed.status,
        })
        .collect()
}

/// Open job roles offered by the candidate role filter.
pub fn job_roles() -> Vec<String> {
    JOB_SEEDS.iter().map(|seed| seed.title.to_string()).collect()
}

/// Applicants listed on the candidates screen, ids `1..=8`.
pub fn candidates() -> Vec<Candidate> {
    CANDIDATE_SEEDS
        .iter()
        .zip(1u32..)
        .map(|(seed, id)| seed.build(CandidateId(id)))
        .collect()
}

/// Candidate pool the fixture match engine draws from, labelled with the job being matched.
pub fn match_pool(job_title: &str) -> Vec<MatchResult> {
    MATCH_SEEDS
        .iter()
        .zip(1u32..)
        .map(|(seed, id)| {
            let mut candidate = seed.candidate.build(CandidateId(id));
            candidate.applied_job = job_title.to_string();
            candidate.skills = owned(seed.skills);
            candidate.experience = Some(seed.experience.to_string());
            MatchResult {
                candidate,
                match_percentage: Score::saturating(seed.match_percentage),
            }
        })
        .collect()
}
