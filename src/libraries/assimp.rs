//! Open Asset Import Library.

use crate::core::{ArtifactMapping, BuildSpec};

pub fn spec() -> BuildSpec {
    BuildSpec::new("assimp", "external/assimp")
        .args([
            "-DBUILD_SHARED_LIBS=OFF",
            "-DASSIMP_NO_EXPORT=ON",
            "-DASSIMP_BUILD_ASSIMP_TOOLS=OFF",
            "-DASSIMP_BUILD_TESTS=OFF",
            "-DINJECT_DEBUG_POSTFIX=OFF",
        ])
        .includes(["include/assimp"])
        .libs(
            ArtifactMapping::new()
                .map("code/libassimp.a", "libassimp.a")
                .map("code/Debug/assimp-vc142-mt.lib", "assimp.lib")
                .map("code/Debug/assimp-vc142-mt.pdb", "assimp-vc142-mt.pdb")
                .map("code/RelWithDebInfo/assimp-vc142-mt.lib", "assimp.lib")
                .map("code/RelWithDebInfo/assimp-vc142-mt.pdb", "assimp-vc142-mt.pdb")
                .map("contrib/irrXML/Debug/IrrXML.lib", "IrrXML.lib")
                .map("contrib/irrXML/RelWithDebInfo/IrrXML.lib", "IrrXML.lib")
                .map("contrib/zlib/Debug/zlibstaticd.lib", "zlib.lib")
                .map("contrib/zlib/RelWithDebInfo/zlibstatic.lib", "zlib.lib"),
        )
        .project_files(["code/assimp.vcxproj", "contrib/irrXML/IrrXML.vcxproj"])
}
