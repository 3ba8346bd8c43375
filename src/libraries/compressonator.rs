//! AMD Compressonator texture compression library.

use crate::core::{ArtifactMapping, BuildSpec, IdeProject, PlatformKey};

pub fn specs() -> Vec<BuildSpec> {
    vec![
        BuildSpec::new("compressonator", "external/Compressonator/Compressonator")
            .ide(
                IdeProject::new("VS2015/CompressonatorLib")
                    .labels("Debug_MD", "Release_MD")
                    .upgrade(true),
            )
            .libs(
                ArtifactMapping::new()
                    .map("Build/VS2015/Debug_MD/x64/Compressonator_MDd.lib", "Compressonator.lib")
                    .map("Build/VS2015/Release_MD/x64/Compressonator_MD.lib", "Compressonator.lib"),
            )
            .project_files(["VS2015/CompressonatorLib.vcxproj"])
            .only_on([PlatformKey::Windows]),
        BuildSpec::new("compressonator", "external/Compressonator/Compressonator/Make")
            .only_on([PlatformKey::MacOs, PlatformKey::Linux]),
    ]
}
