use phf::{phf_map, Map};

pub(crate) static GBK: Map<u16, u16> = phf_map! {
    0x000bu16 => 466, 0x00acu16 => 586, 0x013fu16 => 584, 0x0142u16 => 581, 0x01a3u16 => 251,
    0x01b6u16 => 299, 0x0232u16 => 166, 0x0279u16 => 268, 0x0288u16 => 493, 0x0325u16 => 423,
    0x0334u16 => 402, 0x035cu16 => 216, 0x0394u16 => 333, 0x0399u16 => 238, 0x041eu16 => 412,
    0x0433u16 => 191, 0x0461u16 => 173, 0x0514u16 => 455, 0x0555u16 => 474, 0x058du16 => 347,
    0x067fu16 => 165, 0x06b7u16 => 578, 0x0701u16 => 182, 0x0704u16 => 429, 0x0706u16 => 236,
    0x07b2u16 => 322, 0x07b5u16 => 337, 0x0879u16 => 376, 0x0b17u16 => 518, 0x0b50u16 => 213,
    0x0b61u16 => 515, 0x0b62u16 => 190, 0x0b65u16 => 555, 0x0b66u16 => 378, 0x0b92u16 => 194,
    0x0b98u16 => 183, 0x0d66u16 => 339, 0x0d96u16 => 414, 0x0e13u16 => 187, 0x0e16u16 => 294,
    0x0e47u16 => 311, 0x0e49u16 => 411, 0x0e83u16 => 501, 0x0e8cu16 => 270, 0x10afu16 => 404,
    0x11b0u16 => 350, 0x12bdu16 => 399, 0x139fu16 => 261, 0x1432u16 => 573, 0x14b7u16 => 272,
    0x14bdu16 => 559, 0x153cu16 => 379, 0x1709u16 => 483, 0x170fu16 => 366, 0x174au16 => 227,
    0x178au16 => 214, 0x1792u16 => 478, 0x189fu16 => 358, 0x1936u16 => 233, 0x1a11u16 => 409,
    0x1a1du16 => 503, 0x1a32u16 => 303, 0x1b89u16 => 223, 0x1b97u16 => 300, 0x1c0du16 => 177,
    0x1cb9u16 => 371, 0x1da8u16 => 589, 0x1e2fu16 => 528, 0x1ea0u16 => 384, 0x1f4du16 => 372,
    0x1fadu16 => 189, 0x2b06u16 => 480, 0x2d53u16 => 523, 0x2f2cu16 => 543, 0x3049u16 => 475,
    0x331fu16 => 314, 0x3416u16 => 257, 0x360eu16 => 516, 0x3611u16 => 225, 0x3625u16 => 326,
    0x385cu16 => 309, 0x3b33u16 => 243, 0x3b34u16 => 172, 0x3b48u16 => 431, 0x3b59u16 => 171,
    0x3c0du16 => 472, 0x3c2fu16 => 395, 0x3c39u16 => 427, 0x3c5au16 => 525, 0x3d13u16 => 217,
    0x3e28u16 => 176, 0x3e41u16 => 449, 0x3e56u16 => 279, 0x4054u16 => 245, 0x4152u16 => 363,
    0x4154u16 => 323, 0x415fu16 => 169, 0x4423u16 => 521, 0x4424u16 => 490, 0x4701u16 => 316,
    0x4726u16 => 331, 0x4b4du16 => 398, 0x4b55u16 => 220, 0x4f27u16 => 367, 0x5022u16 => 278,
    0x5025u16 => 551, 0x5149u16 => 506, 0x514du16 => 385, 0x5208u16 => 209, 0x521eu16 => 281,
    0x524au16 => 424, 0x525au16 => 292, 0x530fu16 => 445, 0x5313u16 => 297, 0x5351u16 => 308,
    0x5352u16 => 168, 0x540au16 => 361, 0x5426u16 => 579, 0x543bu16 => 178, 0x5452u16 => 418,
    0x5603u16 => 356, 0x5612u16 => 185, 0x5628u16 => 324, 0x5819u16 => 435, 0x5b46u16 => 336,
    0x5b49u16 => 530, 0x5c1eu16 => 425, 0x5d04u16 => 349, 0x5d2bu16 => 249, 0x5d32u16 => 416,
    0x5e00u16 => 590, 0x5e02u16 => 262, 0x5e0cu16 => 255, 0x5e0du16 => 517, 0x5e1cu16 => 417,
    0x5e1eu16 => 547, 0x5e1fu16 => 328, 0x5e2du16 => 184, 0x5e38u16 => 215, 0x5e3fu16 => 514,
    0x5e44u16 => 434, 0x6706u16 => 167, 0x680cu16 => 440, 0x6814u16 => 392, 0x6910u16 => 485,
    0x695fu16 => 397, 0x6a01u16 => 370, 0x6a08u16 => 266, 0x6a38u16 => 317, 0x6a39u16 => 259,
    0x6c50u16 => 244, 0x6c59u16 => 267, 0x6d09u16 => 383, 0x6d1eu16 => 437, 0x6d3du16 => 463,
    0x6d4fu16 => 319, 0x6e0cu16 => 346, 0x6f02u16 => 198, 0x7012u16 => 473, 0x715du16 => 263,
    0x7319u16 => 321, 0x7b0eu16 => 526, 0x7b23u16 => 496, 0x7b28u16 => 462,
};
