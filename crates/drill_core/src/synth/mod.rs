// 레이아웃 / 애니메이션 합성 모듈

pub mod animation;
pub mod layout;

pub use animation::AnimationSynthesizer;
pub use layout::LayoutSynthesizer;
