//! Static portfolio content shared by the page and the resume endpoint.

use crate::layout::NavItem;
use crate::resume::{Education, Experience, Project, ResumeData, Skills};
use crate::tone::ToneVariants;

pub const NAME: &str = "Riddhiman Raut";
pub const ROLE: &str = "Forward Deployed Engineer";
pub const TAGLINE: &str = "Simulations & Physics AI";
pub const EMAIL: &str = "rik.raut98@gmail.com";
pub const WORK_EMAIL: &str = "riddhiman@luminarycloud.com";
pub const LOCATION: &str = "San Francisco Bay Area";

pub const GITHUB_URL: &str = "https://github.com/RiddhimanRaut";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/riddhiman-raut-21321b130/";
pub const SCHOLAR_URL: &str = "https://scholar.google.com/citations?user=KLyNq24AAAAJ&hl=en";

pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem { label: "About", href: "#about" },
    NavItem { label: "Experience", href: "#experience" },
    NavItem { label: "Projects", href: "#projects" },
    NavItem { label: "Skills", href: "#skills" },
    NavItem { label: "Contact", href: "#contact" },
];

pub const ABOUT_PARAGRAPH_1: ToneVariants<'static> = ToneVariants {
    concise_casual: "I'm an engineer at Luminary Cloud working on cloud-based physics simulations. I help companies run complex engineering simulations faster and more efficiently.",
    concise_technical: "Forward Deployed Engineer at Luminary Cloud, specializing in cloud-native CFD/FEA infrastructure. Building scalable simulation workflows with HPC integration and ML-accelerated solvers.",
    detailed_casual: "I'm a Forward Deployed Engineer at Luminary Cloud, where I work at the intersection of cloud computing and computational physics. My role involves helping companies move their engineering simulations to the cloud, making complex physics calculations accessible and efficient. I work directly with customers to understand their needs and build custom solutions.",
    detailed_technical: "As a Forward Deployed Engineer at Luminary Cloud, I architect and deploy cloud-native computational physics infrastructure. My work spans the full stack of simulation technology: from HPC cluster orchestration and GPU-accelerated solvers to customer-facing APIs and integration pipelines. I specialize in translating complex CFD/FEA workflows into scalable, production-ready systems.",
};

pub const ABOUT_PARAGRAPH_2: ToneVariants<'static> = ToneVariants {
    concise_casual: "I have a PhD from Penn State where I researched using AI to speed up physics simulations. I'm particularly interested in graph neural networks for mesh-based problems.",
    concise_technical: "PhD in Mechanical Engineering (Penn State) with focus on Scientific Machine Learning. Research on GNN-based neural surrogates achieving 10-100x speedup over traditional solvers while maintaining physical consistency.",
    detailed_casual: "I earned my PhD in Mechanical Engineering from Penn State, where I specialized in Scientific Machine Learning. My research focused on developing new ways to use neural networks to accelerate physics simulations. Instead of running expensive calculations that take hours or days, I built AI models that can predict the results in seconds. I worked a lot with graph neural networks, which are great for handling the complex mesh structures used in engineering simulations.",
    detailed_technical: "My PhD research at Penn State focused on Scientific Machine Learning (SciML), specifically developing graph neural network architectures for physics simulation acceleration. Key contributions include: multiscale GNN frameworks achieving 10x improvement over baseline architectures for turbulent flow prediction, interpretable feature modules for exposing learned physics representations, and transfer learning strategies enabling domain generalization across mesh resolutions. Publications span applications in CFD, additive manufacturing, and structural analysis.",
};

/// `(label, variants)` for the highlight cards under the about text.
pub const ABOUT_HIGHLIGHTS: [(&str, ToneVariants<'static>); 3] = [
    (
        "Physics AI",
        ToneVariants {
            concise_casual: "AI models for engineering simulations",
            concise_technical: "Neural surrogate models for CFD/FEA with physics-informed constraints",
            detailed_casual: "Building AI models that can predict the results of complex engineering simulations like fluid dynamics and structural analysis",
            detailed_technical: "Developing differentiable neural surrogates for computational physics, incorporating physics-informed loss functions, symmetry equivariance, and conservation constraints",
        },
    ),
    (
        "SciML",
        ToneVariants {
            concise_casual: "Using ML for scientific problems",
            concise_technical: "Scientific Machine Learning research and applications",
            detailed_casual: "Applying machine learning techniques to solve scientific and engineering problems, bridging the gap between traditional simulation and modern AI",
            detailed_technical: "Research in Scientific Machine Learning spanning neural operators, physics-informed neural networks, and hybrid numerical-ML solvers for PDEs",
        },
    ),
    (
        "GNNs",
        ToneVariants {
            concise_casual: "Neural networks for mesh data",
            concise_technical: "Graph neural networks for unstructured mesh geometries",
            detailed_casual: "Using graph neural networks to work with the complex mesh structures used in engineering simulations, enabling AI to understand geometry",
            detailed_technical: "Multiscale message-passing GNNs for unstructured meshes, with applications in transient dynamics, steady-state prediction, and autoregressive rollout",
        },
    ),
];

/// Tone-morphing text addressed by key: `about-1`, `about-2` and
/// `highlight-1` through `highlight-3`.
pub fn tone_block(key: &str) -> Option<ToneVariants<'static>> {
    match key {
        "about-1" => Some(ABOUT_PARAGRAPH_1),
        "about-2" => Some(ABOUT_PARAGRAPH_2),
        _ => {
            let n: usize = key.strip_prefix("highlight-")?.parse().ok()?;
            ABOUT_HIGHLIGHTS
                .get(n.checked_sub(1)?)
                .map(|(_, variants)| *variants)
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The resume record built from the embedded content.
pub fn resume_data() -> ResumeData {
    ResumeData {
        name: NAME.into(),
        email: EMAIL.into(),
        work_email: WORK_EMAIL.into(),
        location: LOCATION.into(),
        linkedin_url: LINKEDIN_URL.into(),
        github_url: GITHUB_URL.into(),
        google_scholar_url: SCHOLAR_URL.into(),
        summary: "Forward Deployed Engineer at Luminary Cloud with a Ph.D. in Mechanical \
                  Engineering (Penn State, Dec 2025) focused on Scientific Machine Learning. \
                  Builds graph neural network surrogates and HPC simulation workflows that \
                  bring CFD/FEA into production engineering systems."
            .into(),
        education: vec![
            Education {
                institution: "The Pennsylvania State University".into(),
                degree: "Ph.D. in Mechanical Engineering".into(),
                field: Some("Minor in Computational Science".into()),
                period: "Aug 2022 - Dec 2025".into(),
                location: "State College, PA".into(),
                gpa: Some("3.85".into()),
            },
            Education {
                institution: "Jadavpur University".into(),
                degree: "B.E. in Mechanical Engineering".into(),
                field: None,
                period: "2016 - 2020".into(),
                location: "Kolkata, India".into(),
                gpa: None,
            },
        ],
        experience: vec![
            Experience {
                company: "Luminary Cloud".into(),
                role: "Forward Deployed Engineer".into(),
                period: "Jan 2026 - Present".into(),
                location: "San Mateo, CA".into(),
                bullets: strings(&[
                    "Leading customer-facing technical implementations for cloud-based CFD/FEA simulations",
                    "Developing custom simulation workflows and integrations for enterprise clients",
                    "Bridging the gap between complex physics simulations and production engineering systems",
                ]),
                tools: None,
            },
            Experience {
                company: "Pasteur Labs".into(),
                role: "Simulation Intelligence Intern".into(),
                period: "May 2025 - Aug 2025".into(),
                location: "New York, NY".into(),
                bullets: strings(&[
                    "Improved rollout stability in autoregressive surrogates by 40% for reliable long-horizon predictions",
                    "Cut training time by 45% and compute needs by 87% using pushforward and temporal bundling",
                    "Deployed production-ready GNNs for steady-state modeling, expanding surrogate portfolio",
                ]),
                tools: None,
            },
        ],
        projects: vec![
            Project {
                title: "Scalable GNNs for Additive Manufacturing".into(),
                period: "Oct 2023 - Jul 2024".into(),
                bullets: strings(&[
                    "Built GCNs for laser powder bed fusion scan paths; scaled to 2x-4x domains via transfer learning",
                ]),
                publication: Some("Scalable GNNs for Additive Manufacturing".into()),
                publication_link: Some(
                    "https://www.sciencedirect.com/science/article/abs/pii/S095219762500898X".into(),
                ),
            },
            Project {
                title: "Multiscale GNNs for Turbulence".into(),
                period: "Aug 2024 - May 2025".into(),
                bullets: strings(&[
                    "Modeled turbulent flow around turbine pin-fins, 10x better than GCNs, GraphSAGE and MeshGraphNets",
                ]),
                publication: Some("Multiscale GNNs for Turbulence".into()),
                publication_link: Some("https://arxiv.org/abs/2509.04463".into()),
            },
            Project {
                title: "FIGNN: Interpretable GNN Surrogates".into(),
                period: "Dec 2024 - May 2025".into(),
                bullets: strings(&[
                    "Built feature-specific interpretability for multiscale GNNs, exposing physical spatial patterns",
                ]),
                publication: Some("FIGNN: Interpretable GNN Surrogates".into()),
                publication_link: Some("https://arxiv.org/abs/2506.11398".into()),
            },
        ],
        skills: Skills {
            programming: strings(&["Python", "C++", "Julia", "MATLAB", "Fortran"]),
            ml: strings(&["PyTorch", "JAX", "GNNs", "Neural Operators", "Transformers", "LLMs"]),
            hpc: strings(&["CUDA", "MPI", "OpenMP", "Slurm", "Azure ML", "AWS"]),
            simulation: strings(&["ANSYS", "OpenFOAM", "OpenRadioss", "ANSA", "COMSOL", "Netfabb"]),
        },
        leadership: Some(strings(&[
            "Mentored an undergraduate honors thesis on graph neural network surrogates",
            "Delivered guest lectures on machine learning for mechanical engineering courses",
        ])),
    }
}
